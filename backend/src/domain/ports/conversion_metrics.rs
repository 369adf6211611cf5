//! Domain port surface for recording per-call request metrics.
//!
//! The instrumenting decorator feeds one counter increment and one latency
//! observation per capability call through this port, without coupling the
//! domain to a specific metrics backend.

use async_trait::async_trait;

/// Errors exposed when recording metrics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionMetricsError {
    /// Metric exporter rejected the write.
    #[error("conversion metrics exporter failed: {message}")]
    Export { message: String },
}

impl ConversionMetricsError {
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }
}

/// Labels attached to every metrics write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionMetricLabels {
    /// Operation label, `"pdf"` for this capability.
    pub method: &'static str,
    /// Whether the wrapped call succeeded.
    pub success: bool,
}

/// Metrics sink port.
///
/// Implementations must be safe for concurrent use by many simultaneous
/// callers; synchronisation is their responsibility, not the decorator's.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversionMetrics: Send + Sync {
    /// Increment the request counter by one.
    async fn increment(
        &self,
        labels: &ConversionMetricLabels,
    ) -> Result<(), ConversionMetricsError>;

    /// Observe the elapsed duration of one call, in seconds.
    async fn observe(
        &self,
        labels: &ConversionMetricLabels,
        seconds: f64,
    ) -> Result<(), ConversionMetricsError>;
}

/// No-op implementation for tests and disabled metrics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpConversionMetrics;

#[async_trait]
impl ConversionMetrics for NoOpConversionMetrics {
    async fn increment(
        &self,
        _labels: &ConversionMetricLabels,
    ) -> Result<(), ConversionMetricsError> {
        Ok(())
    }

    async fn observe(
        &self,
        _labels: &ConversionMetricLabels,
        _seconds: f64,
    ) -> Result<(), ConversionMetricsError> {
        Ok(())
    }
}
