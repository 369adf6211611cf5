//! Instrumenting decorator for the conversion capability.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::Error;
use crate::domain::decorators::DecoratorLayer;
use crate::domain::ports::{
    ConversionMetricLabels, ConversionMetrics, METHOD_PDF, PdfConversion,
};

/// Wraps a conversion capability and records one metric pair per call:
/// a counter increment and a latency observation, labelled with the method
/// name and the success flag of the inner result.
///
/// The inner result is returned unchanged; an exporter rejection is
/// warn-logged and never masks it.
pub struct InstrumentingPdfConversion {
    inner: Arc<dyn PdfConversion>,
    metrics: Arc<dyn ConversionMetrics>,
}

impl InstrumentingPdfConversion {
    /// Wrap `inner`, recording to `metrics`.
    pub fn new(inner: Arc<dyn PdfConversion>, metrics: Arc<dyn ConversionMetrics>) -> Self {
        Self { inner, metrics }
    }

    /// Layer constructor for [`compose`](crate::domain::decorators::compose).
    pub fn layer(metrics: Arc<dyn ConversionMetrics>) -> DecoratorLayer {
        Box::new(move |inner| Arc::new(Self::new(inner, metrics)))
    }
}

#[async_trait]
impl PdfConversion for InstrumentingPdfConversion {
    async fn convert(&self, input: &str) -> Result<String, Error> {
        let started = Instant::now();
        let result = self.inner.convert(input).await;

        let labels = ConversionMetricLabels {
            method: METHOD_PDF,
            success: result.is_ok(),
        };
        if let Err(error) = self.metrics.increment(&labels).await {
            warn!(%error, "conversion metrics exporter rejected increment");
        }
        if let Err(error) = self
            .metrics
            .observe(&labels, started.elapsed().as_secs_f64())
            .await
        {
            warn!(%error, "conversion metrics exporter rejected observation");
        }

        result
    }
}
