//! Outbound adapter for the logging sink.

mod tracing_conversion;

pub use tracing_conversion::TracingConversionLog;
