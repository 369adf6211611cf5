//! Tracing adapter for the conversion logging sink.
//!
//! Emits one structured event per record; the subscriber installed at
//! process startup decides formatting and destination.

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{ConversionLog, ConversionLogError, ConversionRecord};

/// Logging sink forwarding records to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingConversionLog;

#[async_trait]
impl ConversionLog for TracingConversionLog {
    async fn record(&self, record: &ConversionRecord) -> Result<(), ConversionLogError> {
        info!(
            method = record.method,
            input = %record.input,
            output = %record.output,
            error = record.error.as_deref().unwrap_or(""),
            took = ?record.elapsed,
            "conversion handled"
        );
        Ok(())
    }
}
