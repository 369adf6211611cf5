//! Prometheus adapter for conversion request metrics.
//!
//! Exports one counter and one latency histogram per capability call,
//! registered against a provided registry and exposed through the
//! `/metrics` route.
//!
//! # Metric Specification
//!
//! - **`<ns>_<ss>_request_count`** (counter): requests received.
//! - **`<ns>_<ss>_request_latency_seconds`** (histogram): call duration.
//! - **Labels** on both:
//!   - `method`: the capability operation, `pdf`
//!   - `error`: `"false"` on success, `"true"` on a domain failure

use async_trait::async_trait;
use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry};

use crate::domain::ports::{
    ConversionMetricLabels, ConversionMetrics, ConversionMetricsError,
};

/// Prometheus-backed conversion metrics recorder.
pub struct PrometheusConversionMetrics {
    request_count: CounterVec,
    request_latency: HistogramVec,
}

impl PrometheusConversionMetrics {
    /// Create and register both collectors with the given registry under the
    /// configured namespace and subsystem.
    ///
    /// # Errors
    ///
    /// Returns an error if a collector cannot be registered, e.g. when a
    /// metric with the same name already exists in the registry.
    pub fn new(
        registry: &Registry,
        namespace: &str,
        subsystem: &str,
    ) -> Result<Self, prometheus::Error> {
        let request_count = CounterVec::new(
            Opts::new("request_count", "Number of requests received.")
                .namespace(namespace.to_owned())
                .subsystem(subsystem.to_owned()),
            &["method", "error"],
        )?;
        let request_latency = HistogramVec::new(
            HistogramOpts::new(
                "request_latency_seconds",
                "Total duration of requests in seconds.",
            )
            .namespace(namespace.to_owned())
            .subsystem(subsystem.to_owned()),
            &["method", "error"],
        )?;
        registry.register(Box::new(request_count.clone()))?;
        registry.register(Box::new(request_latency.clone()))?;
        Ok(Self {
            request_count,
            request_latency,
        })
    }

    fn label_values(labels: &ConversionMetricLabels) -> [&str; 2] {
        let error = if labels.success { "false" } else { "true" };
        [labels.method, error]
    }
}

#[async_trait]
impl ConversionMetrics for PrometheusConversionMetrics {
    async fn increment(
        &self,
        labels: &ConversionMetricLabels,
    ) -> Result<(), ConversionMetricsError> {
        self.request_count
            .with_label_values(&Self::label_values(labels))
            .inc();
        Ok(())
    }

    async fn observe(
        &self,
        labels: &ConversionMetricLabels,
        seconds: f64,
    ) -> Result<(), ConversionMetricsError> {
        self.request_latency
            .with_label_values(&Self::label_values(labels))
            .observe(seconds);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::METHOD_PDF;

    fn labels(success: bool) -> ConversionMetricLabels {
        ConversionMetricLabels {
            method: METHOD_PDF,
            success,
        }
    }

    #[test]
    fn registers_both_collectors_with_the_registry() {
        let registry = Registry::new();
        PrometheusConversionMetrics::new(&registry, "docforge", "pdf_service")
            .expect("metric registration succeeds");

        let names: Vec<String> = registry
            .gather()
            .iter()
            .map(|family| family.name().to_owned())
            .collect();
        assert!(names.contains(&"docforge_pdf_service_request_count".to_owned()));
        assert!(names.contains(&"docforge_pdf_service_request_latency_seconds".to_owned()));
    }

    #[test]
    fn registering_twice_against_one_registry_fails() {
        let registry = Registry::new();
        PrometheusConversionMetrics::new(&registry, "docforge", "pdf_service")
            .expect("first registration succeeds");
        assert!(PrometheusConversionMetrics::new(&registry, "docforge", "pdf_service").is_err());
    }

    #[tokio::test]
    async fn increment_counts_under_the_success_polarity_labels() {
        let registry = Registry::new();
        let metrics = PrometheusConversionMetrics::new(&registry, "docforge", "pdf_service")
            .expect("metric registration succeeds");

        metrics.increment(&labels(true)).await.expect("increment");
        metrics.increment(&labels(true)).await.expect("increment");
        metrics.increment(&labels(false)).await.expect("increment");

        let success = metrics
            .request_count
            .with_label_values(&[METHOD_PDF, "false"]);
        let failure = metrics
            .request_count
            .with_label_values(&[METHOD_PDF, "true"]);
        assert_eq!(success.get() as u64, 2);
        assert_eq!(failure.get() as u64, 1);
    }

    #[tokio::test]
    async fn observe_feeds_the_latency_histogram() {
        let registry = Registry::new();
        let metrics = PrometheusConversionMetrics::new(&registry, "docforge", "pdf_service")
            .expect("metric registration succeeds");

        metrics
            .observe(&labels(true), 0.025)
            .await
            .expect("observe");

        let histogram = metrics
            .request_latency
            .with_label_values(&[METHOD_PDF, "false"]);
        assert_eq!(histogram.get_sample_count(), 1);
        assert!((histogram.get_sample_sum() - 0.025).abs() < f64::EPSILON);
    }
}
