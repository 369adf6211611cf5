//! Logging decorator for the conversion capability.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::Error;
use crate::domain::decorators::DecoratorLayer;
use crate::domain::ports::{ConversionLog, ConversionRecord, PdfConversion};

/// Wraps a conversion capability and emits one log record per call.
///
/// The record carries the method label, the literal input and output, the
/// failure description when the inner call failed, and the elapsed
/// wall-clock duration. The inner result is returned unchanged; a sink
/// rejection is warn-logged and never masks it.
pub struct LoggingPdfConversion {
    inner: Arc<dyn PdfConversion>,
    log: Arc<dyn ConversionLog>,
}

impl LoggingPdfConversion {
    /// Wrap `inner`, emitting records to `log`.
    pub fn new(inner: Arc<dyn PdfConversion>, log: Arc<dyn ConversionLog>) -> Self {
        Self { inner, log }
    }

    /// Layer constructor for [`compose`](crate::domain::decorators::compose).
    pub fn layer(log: Arc<dyn ConversionLog>) -> DecoratorLayer {
        Box::new(move |inner| Arc::new(Self::new(inner, log)))
    }
}

#[async_trait]
impl PdfConversion for LoggingPdfConversion {
    async fn convert(&self, input: &str) -> Result<String, Error> {
        let started = Instant::now();
        let result = self.inner.convert(input).await;

        // One record per call, on the success and the failure path alike.
        let record = ConversionRecord::from_outcome(input, &result, started.elapsed());
        if let Err(error) = self.log.record(&record).await {
            warn!(%error, "conversion log sink rejected record");
        }

        result
    }
}
