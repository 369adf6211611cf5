//! Outbound adapter for metrics exporting.

mod prometheus_conversion;

pub use prometheus_conversion::PrometheusConversionMetrics;
