//! Domain ports and supporting types for the hexagonal boundary.

mod conversion_log;
mod conversion_metrics;
mod pdf_conversion;
mod pdf_renderer;

#[cfg(test)]
pub use conversion_log::MockConversionLog;
pub use conversion_log::{ConversionLog, ConversionLogError, ConversionRecord, NoOpConversionLog};
#[cfg(test)]
pub use conversion_metrics::MockConversionMetrics;
pub use conversion_metrics::{
    ConversionMetricLabels, ConversionMetrics, ConversionMetricsError, NoOpConversionMetrics,
};
#[cfg(test)]
pub use pdf_conversion::MockPdfConversion;
pub use pdf_conversion::{METHOD_PDF, PdfConversion};
#[cfg(test)]
pub use pdf_renderer::MockPdfRenderer;
pub use pdf_renderer::{FixturePdfRenderer, PdfRenderError, PdfRenderer, RenderedPdf};
