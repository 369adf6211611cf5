//! Document conversion domain service.
//!
//! Implements the [`PdfConversion`] driving port. The service is stateless;
//! each call is independent and the artifact side effect is delegated to the
//! rendering port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Error;
use crate::domain::ports::{PdfConversion, PdfRenderError, PdfRenderer};

/// Fixed payload returned on every successful conversion.
const CONVERSION_DONE: &str = "Done";

/// Conversion service implementing the driving port.
///
/// Rejects empty input before any side effect; otherwise performs exactly
/// one render call per invocation.
#[derive(Clone)]
pub struct PdfConversionService<R> {
    renderer: Arc<R>,
}

impl<R> PdfConversionService<R> {
    /// Create a new service over the given rendering engine.
    pub fn new(renderer: Arc<R>) -> Self {
        Self { renderer }
    }
}

impl<R> PdfConversionService<R>
where
    R: PdfRenderer,
{
    fn map_render_error(error: PdfRenderError) -> Error {
        match error {
            PdfRenderError::Engine { message } => {
                Error::internal(format!("pdf engine failed: {message}"))
            }
            PdfRenderError::Io { message } => {
                Error::service_unavailable(format!("artifact write failed: {message}"))
            }
        }
    }
}

#[async_trait]
impl<R> PdfConversion for PdfConversionService<R>
where
    R: PdfRenderer,
{
    async fn convert(&self, input: &str) -> Result<String, Error> {
        if input.is_empty() {
            return Err(Error::invalid_request("Empty string"));
        }

        let artifact = self
            .renderer
            .render(input)
            .await
            .map_err(Self::map_render_error)?;
        debug!(path = %artifact.path.display(), "pdf artifact written");

        Ok(CONVERSION_DONE.to_owned())
    }
}
