//! PDF engine adapter backed by the `printpdf` crate.
//!
//! Typesets the input onto an A4 portrait page in bold 16 pt and writes one
//! artifact per call into the configured output directory. Artifacts get a
//! UUID-based filename so repeated calls never overwrite each other.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use async_trait::async_trait;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use uuid::Uuid;

use crate::domain::ports::{PdfRenderError, PdfRenderer, RenderedPdf};

/// Rendering engine writing artifacts under a fixed output directory.
#[derive(Debug, Clone)]
pub struct PrintpdfRenderer {
    output_dir: PathBuf,
}

impl PrintpdfRenderer {
    /// Create a renderer writing into `output_dir`.
    ///
    /// The directory must already exist; the process entry point creates it
    /// at startup.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn artifact_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.pdf", Uuid::new_v4()))
    }
}

#[async_trait]
impl PdfRenderer for PrintpdfRenderer {
    async fn render(&self, text: &str) -> Result<RenderedPdf, PdfRenderError> {
        // A4 portrait, dimensions in millimetres.
        let (doc, page, layer) = PdfDocument::new("docforge", Mm(210.0), Mm(297.0), "text");
        let font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| PdfRenderError::engine(err.to_string()))?;

        let layer = doc.get_page(page).get_layer(layer);
        layer.use_text(text, 16.0, Mm(20.0), Mm(277.0), &font);
        layer.use_text(text, 16.0, Mm(20.0), Mm(267.0), &font);

        let path = self.artifact_path();
        let file = File::create(&path).map_err(|err| PdfRenderError::io(err.to_string()))?;
        doc.save(&mut BufWriter::new(file))
            .map_err(|err| PdfRenderError::engine(err.to_string()))?;

        Ok(RenderedPdf { path })
    }
}
