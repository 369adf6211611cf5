//! Domain layer: the conversion capability, its decorators, and the ports
//! they depend on.
//!
//! Everything here is transport agnostic. Inbound adapters call the
//! [`ports::PdfConversion`] capability; outbound adapters implement the
//! renderer and sink ports against real infrastructure.

pub mod conversion_service;
pub mod decorators;
pub mod error;
pub mod ports;

pub use self::conversion_service::PdfConversionService;
pub use self::decorators::{
    DecoratorLayer, InstrumentingPdfConversion, LoggingPdfConversion, compose,
};
pub use self::error::{Error, ErrorCode};
