//! Decorator composition pipeline for the conversion capability.
//!
//! Each decorator implements [`PdfConversion`] while owning an inner
//! `Arc<dyn PdfConversion>`, so cross-cutting behaviour stacks to arbitrary
//! depth without the wrapped service knowing about it. [`compose`] folds a
//! list of layer constructors over a service, keeping the wiring itself
//! unit-testable away from the network listener.

mod instrumenting;
mod logging;

pub use instrumenting::InstrumentingPdfConversion;
pub use logging::LoggingPdfConversion;

use std::sync::Arc;

use crate::domain::ports::PdfConversion;

/// Boxed constructor turning an inner capability into a wrapped one.
pub type DecoratorLayer = Box<dyn FnOnce(Arc<dyn PdfConversion>) -> Arc<dyn PdfConversion> + Send>;

/// Wrap `service` in the given layers.
///
/// The first layer in the list wraps closest to the service; the last
/// becomes the outermost. Post-call observations therefore run innermost
/// first, in strict LIFO order relative to call entry. An empty list
/// returns the service unchanged.
pub fn compose(service: Arc<dyn PdfConversion>, layers: Vec<DecoratorLayer>) -> Arc<dyn PdfConversion> {
    layers.into_iter().fold(service, |inner, layer| layer(inner))
}
