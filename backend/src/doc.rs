//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated OpenAPI specification covering the
//! conversion route, the metrics exposition route, and the health probes.
//! Debug builds serve the document at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::convert::{ConvertRequest, ConvertResponse};

/// OpenAPI document for the conversion service API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "docforge API",
        description = "Text-to-PDF conversion over HTTP with health probes and Prometheus metrics."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::convert::convert_pdf,
        crate::inbound::http::metrics::export_metrics,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ConvertRequest, ConvertResponse, Error, ErrorCode)),
    tags(
        (name = "convert", description = "Document conversion operations"),
        (name = "metrics", description = "Prometheus text exposition"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
