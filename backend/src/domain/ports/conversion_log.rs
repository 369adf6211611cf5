//! Domain port surface for the per-call logging sink.
//!
//! The logging decorator emits exactly one record per capability call
//! through this port. Implementations may forward to structured logging,
//! buffer for tests, or discard records entirely.

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::ports::pdf_conversion::METHOD_PDF;

/// Errors exposed when emitting a log record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionLogError {
    /// The sink rejected the record.
    #[error("conversion log sink failed: {message}")]
    Sink { message: String },
}

impl ConversionLogError {
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }
}

/// Ordered key-value record describing one capability call.
///
/// Ephemeral: built after the inner call completes and discarded once the
/// sink has seen it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRecord {
    /// Operation label, [`METHOD_PDF`] for this capability.
    pub method: &'static str,
    /// Literal input passed to the capability.
    pub input: String,
    /// Literal output returned by the capability, empty on failure.
    pub output: String,
    /// Failure description when the call failed.
    pub error: Option<String>,
    /// Wall-clock duration of the wrapped call.
    pub elapsed: Duration,
}

impl ConversionRecord {
    /// Build a record for the capability operation from its observed outcome.
    pub fn from_outcome(input: &str, outcome: &Result<String, Error>, elapsed: Duration) -> Self {
        Self {
            method: METHOD_PDF,
            input: input.to_owned(),
            output: outcome.as_deref().unwrap_or_default().to_owned(),
            error: outcome.as_ref().err().map(ToString::to_string),
            elapsed,
        }
    }
}

/// Logging sink port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConversionLog: Send + Sync {
    /// Emit one record. Called exactly once per wrapped capability call.
    async fn record(&self, record: &ConversionRecord) -> Result<(), ConversionLogError>;
}

/// No-op implementation for tests and disabled logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpConversionLog;

#[async_trait]
impl ConversionLog for NoOpConversionLog {
    async fn record(&self, _record: &ConversionRecord) -> Result<(), ConversionLogError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_from_success_captures_output_and_no_error() {
        let outcome = Ok("Done".to_owned());
        let record = ConversionRecord::from_outcome("hello", &outcome, Duration::from_millis(3));
        assert_eq!(record.method, METHOD_PDF);
        assert_eq!(record.input, "hello");
        assert_eq!(record.output, "Done");
        assert!(record.error.is_none());
    }

    #[test]
    fn record_from_failure_captures_description_and_empty_output() {
        let outcome = Err(Error::invalid_request("Empty string"));
        let record = ConversionRecord::from_outcome("", &outcome, Duration::ZERO);
        assert_eq!(record.output, "");
        assert_eq!(record.error.as_deref(), Some("Empty string"));
    }

    #[tokio::test]
    async fn noop_sink_accepts_records() {
        let record = ConversionRecord::from_outcome("x", &Ok("Done".to_owned()), Duration::ZERO);
        assert!(NoOpConversionLog.record(&record).await.is_ok());
    }

    #[test]
    fn error_constructor_accepts_str() {
        let err = ConversionLogError::sink("closed");
        assert_eq!(err.to_string(), "conversion log sink failed: closed");
    }
}
