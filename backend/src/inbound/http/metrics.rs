//! Prometheus metrics exposition route.
//!
//! Gathers the shared registry and serialises it in the text exposition
//! format. An encoding failure is surfaced to the caller as an internal
//! error rather than silently dropped.

use actix_web::{HttpResponse, get, web};
use prometheus::{Encoder, TextEncoder};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Content type mandated by the Prometheus text exposition format.
const TEXT_EXPOSITION: &str = "text/plain; version=0.0.4";

/// Export the metrics registry in Prometheus text format.
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Registry contents in text exposition format"),
        (status = 500, description = "Encoding failed", body = crate::domain::Error)
    ),
    tags = ["metrics"],
    operation_id = "exportMetrics"
)]
#[get("/metrics")]
pub async fn export_metrics(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let families = state.registry.gather();
    let mut buffer = Vec::new();
    TextEncoder::new()
        .encode(&families, &mut buffer)
        .map_err(|err| Error::internal(format!("failed to encode metrics: {err}")))?;

    Ok(HttpResponse::Ok()
        .content_type(TEXT_EXPOSITION)
        .body(buffer))
}
