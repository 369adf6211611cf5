//! Server construction and capability wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;

use crate::domain::decorators::{InstrumentingPdfConversion, LoggingPdfConversion, compose};
use crate::domain::ports::PdfConversion;
use crate::domain::PdfConversionService;
use crate::inbound::http::convert::convert_pdf;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::metrics::export_metrics;
use crate::inbound::http::state::HttpState;
use crate::outbound::log::TracingConversionLog;
use crate::outbound::metrics::PrometheusConversionMetrics;
use crate::outbound::render::PrintpdfRenderer;

/// Build the decorated conversion capability from the configuration.
///
/// Wires the rendering engine behind the domain service, then stacks the
/// logging decorator innermost and the instrumenting decorator outermost.
///
/// # Errors
///
/// Returns [`std::io::Error`] if the Prometheus collectors cannot be
/// registered against the configured registry.
pub fn build_conversion_stack(config: &ServerConfig) -> std::io::Result<Arc<dyn PdfConversion>> {
    let metrics = PrometheusConversionMetrics::new(
        &config.registry,
        &config.metrics_namespace,
        &config.metrics_subsystem,
    )
    .map_err(|e| std::io::Error::other(format!("conversion metrics registration failed: {e}")))?;

    let renderer = Arc::new(PrintpdfRenderer::new(config.output_dir.clone()));
    let service: Arc<dyn PdfConversion> = Arc::new(PdfConversionService::new(renderer));

    Ok(compose(
        service,
        vec![
            LoggingPdfConversion::layer(Arc::new(TracingConversionLog)),
            InstrumentingPdfConversion::layer(Arc::new(metrics)),
        ],
    ))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(convert_pdf)
        .service(export_metrics)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.route(
        "/api-docs/openapi.json",
        web::get().to(|| async { web::Json(crate::ApiDoc::openapi()) }),
    );

    app
}

/// Construct the HTTP server using the provided health state and
/// configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when capability wiring or binding the
/// socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let conversion = build_conversion_stack(&config)?;
    let http_state = web::Data::new(HttpState::new(conversion, config.registry.clone()));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
