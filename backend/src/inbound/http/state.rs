//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the capability port and remain testable without real
//! infrastructure.

use std::sync::Arc;

use prometheus::Registry;

use crate::domain::ports::PdfConversion;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use docforge::domain::PdfConversionService;
/// use docforge::domain::ports::FixturePdfRenderer;
/// use docforge::inbound::http::state::HttpState;
///
/// let state = HttpState::new(
///     Arc::new(PdfConversionService::new(Arc::new(FixturePdfRenderer))),
///     prometheus::Registry::new(),
/// );
/// let _conversion = state.conversion.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// The fully decorated conversion capability.
    pub conversion: Arc<dyn PdfConversion>,
    /// Registry gathered by the metrics exposition route.
    pub registry: Registry,
}

impl HttpState {
    /// Construct state from the decorated capability and the registry.
    pub fn new(conversion: Arc<dyn PdfConversion>, registry: Registry) -> Self {
        Self {
            conversion,
            registry,
        }
    }
}
