//! Conversion API handler.
//!
//! ```text
//! POST /pdf  Convert a text payload into a rendered PDF artifact
//! ```
//!
//! The JSON extractor is the decode boundary: a body that does not carry a
//! string field `s` is rejected with a client error before the capability
//! chain is ever invoked. Domain failures, by contrast, are successful
//! adaptations carrying an `err` description — transport-level success and
//! domain-level success are orthogonal here.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::PdfConversion;
use crate::inbound::http::state::HttpState;

/// Conversion request body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ConvertRequest {
    /// Text to typeset. The empty string decodes successfully and is
    /// rejected by the domain service, not by the decoder.
    pub s: String,
}

/// Conversion response body.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ConvertResponse {
    /// Fixed success payload; empty when the conversion failed.
    pub v: String,
    /// Domain failure description; omitted from the wire on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

/// Endpoint adapter bridging the typed DTOs and the capability port.
///
/// A domain failure is reported as response content, never as an adapter
/// failure; the adapter itself cannot fail.
pub async fn adapt(conversion: &dyn PdfConversion, request: ConvertRequest) -> ConvertResponse {
    match conversion.convert(&request.s).await {
        Ok(v) => ConvertResponse { v, err: None },
        Err(error) => ConvertResponse {
            v: String::new(),
            err: Some(error.to_string()),
        },
    }
}

/// Convert a text payload into a rendered PDF artifact.
///
/// # Errors
///
/// - `400 Bad Request`: the body is not JSON or lacks a string field `s`.
///
/// A rejected conversion (empty input, engine failure) is a `200 OK` whose
/// body carries the failure description in `err`.
#[utoipa::path(
    post,
    path = "/pdf",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Conversion outcome", body = ConvertResponse),
        (status = 400, description = "Malformed request body")
    ),
    tags = ["convert"],
    operation_id = "convertPdf"
)]
#[post("/pdf")]
pub async fn convert_pdf(
    state: web::Data<HttpState>,
    payload: web::Json<ConvertRequest>,
) -> HttpResponse {
    let response = adapt(state.conversion.as_ref(), payload.into_inner()).await;
    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decorators::{InstrumentingPdfConversion, LoggingPdfConversion, compose};
    use crate::domain::ports::{
        MockConversionLog, MockConversionMetrics, MockPdfRenderer, RenderedPdf,
    };
    use crate::domain::{Error, PdfConversionService};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use serde_json::{Value, json};
    use std::path::PathBuf;
    use std::sync::Arc;

    fn test_app(
        conversion: Arc<dyn PdfConversion>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let state = HttpState::new(conversion, prometheus::Registry::new());
        App::new()
            .app_data(web::Data::new(state))
            .service(convert_pdf)
    }

    fn service_with_renderer(renderer: MockPdfRenderer) -> Arc<dyn PdfConversion> {
        Arc::new(PdfConversionService::new(Arc::new(renderer)))
    }

    fn rendering_once() -> MockPdfRenderer {
        let mut renderer = MockPdfRenderer::new();
        renderer.expect_render().times(1).return_once(|_| {
            Ok(RenderedPdf {
                path: PathBuf::from("out/a.pdf"),
            })
        });
        renderer
    }

    fn rendering_never() -> MockPdfRenderer {
        let mut renderer = MockPdfRenderer::new();
        renderer.expect_render().times(0);
        renderer
    }

    #[actix_web::test]
    async fn conversion_succeeds_and_omits_the_error_field() {
        let app = actix_test::init_service(test_app(service_with_renderer(rendering_once()))).await;

        let request = actix_test::TestRequest::post()
            .uri("/pdf")
            .set_json(json!({"s": "hello"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("v").and_then(Value::as_str), Some("Done"));
        assert!(body.get("err").is_none(), "err must be omitted on success");
    }

    #[actix_web::test]
    async fn empty_input_reports_the_domain_failure_as_content() {
        let app =
            actix_test::init_service(test_app(service_with_renderer(rendering_never()))).await;

        let request = actix_test::TestRequest::post()
            .uri("/pdf")
            .set_json(json!({"s": ""}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("v").and_then(Value::as_str), Some(""));
        assert_eq!(body.get("err").and_then(Value::as_str), Some("Empty string"));
    }

    #[actix_web::test]
    async fn mistyped_field_is_a_decode_failure_that_reaches_nothing() {
        let mut log = MockConversionLog::new();
        log.expect_record().times(0);
        let mut metrics = MockConversionMetrics::new();
        metrics.expect_increment().times(0);
        metrics.expect_observe().times(0);

        let stack = compose(
            service_with_renderer(rendering_never()),
            vec![
                LoggingPdfConversion::layer(Arc::new(log)),
                InstrumentingPdfConversion::layer(Arc::new(metrics)),
            ],
        );
        let app = actix_test::init_service(test_app(stack)).await;

        let request = actix_test::TestRequest::post()
            .uri("/pdf")
            .set_json(json!({"s": 123}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn missing_field_is_a_decode_failure() {
        let app =
            actix_test::init_service(test_app(service_with_renderer(rendering_never()))).await;

        let request = actix_test::TestRequest::post()
            .uri("/pdf")
            .set_json(json!({"text": "hello"}))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn repeated_conversions_render_independently() {
        let mut renderer = MockPdfRenderer::new();
        renderer.expect_render().times(3).returning(|_| {
            Ok(RenderedPdf {
                path: PathBuf::from("out/b.pdf"),
            })
        });
        let app = actix_test::init_service(test_app(service_with_renderer(renderer))).await;

        for _ in 0..3 {
            let request = actix_test::TestRequest::post()
                .uri("/pdf")
                .set_json(json!({"s": "hello"}))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK);

            let body: Value = actix_test::read_body_json(response).await;
            assert_eq!(body.get("v").and_then(Value::as_str), Some("Done"));
        }
    }

    #[tokio::test]
    async fn adapt_folds_a_domain_failure_into_response_content() {
        struct Failing;

        #[async_trait::async_trait]
        impl PdfConversion for Failing {
            async fn convert(&self, _input: &str) -> Result<String, Error> {
                Err(Error::internal("engine down"))
            }
        }

        let response = adapt(
            &Failing,
            ConvertRequest {
                s: "hello".to_owned(),
            },
        )
        .await;
        assert_eq!(response.v, "");
        assert_eq!(response.err.as_deref(), Some("engine down"));
    }
}
