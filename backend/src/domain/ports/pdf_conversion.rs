//! Driving port for the document conversion capability.
//!
//! This is the polymorphism boundary of the service: the conversion service
//! implements it, every decorator implements it while wrapping another
//! implementation of it, and the inbound HTTP adapter only ever sees the
//! trait object. Any implementor can be substituted or stacked.

use async_trait::async_trait;

use crate::domain::Error;

/// Observability label identifying the single capability operation.
pub const METHOD_PDF: &str = "pdf";

/// Document conversion capability.
///
/// # Contract
///
/// Implementations accept any input string, including the empty string.
/// Wrapping implementations (decorators) must forward the call to an inner
/// instance unchanged and return the inner result unchanged; they must never
/// suppress, alter, or mask an inner failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PdfConversion: Send + Sync {
    /// Convert the input text into a rendered document.
    ///
    /// Returns the fixed success payload, or a domain [`Error`] when the
    /// input is rejected or the rendering side effect fails.
    async fn convert(&self, input: &str) -> Result<String, Error>;
}
