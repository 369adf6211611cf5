//! Outbound adapter for the PDF rendering engine.

mod printpdf_renderer;

pub use printpdf_renderer::PrintpdfRenderer;
