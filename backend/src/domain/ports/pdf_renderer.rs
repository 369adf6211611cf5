//! Outbound port for the PDF rendering engine.
//!
//! The engine is an external collaborator: it receives the text to typeset
//! and either produces one rendered artifact or fails as a unit. The domain
//! service never learns anything about the engine beyond this boundary.

use std::path::PathBuf;

use async_trait::async_trait;

/// Errors exposed by the rendering engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PdfRenderError {
    /// The engine rejected or failed to typeset the document.
    #[error("pdf engine failed: {message}")]
    Engine { message: String },
    /// The artifact could not be written to storage.
    #[error("artifact write failed: {message}")]
    Io { message: String },
}

impl PdfRenderError {
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }
}

/// Location of a rendered artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPdf {
    /// Filesystem path of the written document.
    pub path: PathBuf,
}

/// Rendering engine port.
///
/// Exactly one artifact-producing side effect per successful call; a failed
/// call produces no artifact.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    /// Typeset `text` and write one document artifact.
    async fn render(&self, text: &str) -> Result<RenderedPdf, PdfRenderError>;
}

/// Fixture implementation for tests and fixture-mode wiring.
///
/// Pretends the artifact was written without touching the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePdfRenderer;

#[async_trait]
impl PdfRenderer for FixturePdfRenderer {
    async fn render(&self, _text: &str) -> Result<RenderedPdf, PdfRenderError> {
        Ok(RenderedPdf {
            path: PathBuf::from("fixture.pdf"),
        })
    }
}
