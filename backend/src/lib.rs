//! Library surface of the docforge conversion service.
//!
//! The crate is organised hexagonally: [`domain`] holds the conversion
//! capability, its decorators, and the ports they depend on; [`inbound`]
//! adapts HTTP requests onto the capability; [`outbound`] implements the
//! ports against real infrastructure (PDF engine, Prometheus, tracing);
//! [`server`] wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by the debug document route and tooling.
pub use doc::ApiDoc;
