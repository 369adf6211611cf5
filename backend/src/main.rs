//! docforge entry-point: parses configuration, initialises tracing, and
//! runs the conversion server.

use std::net::SocketAddr;
use std::path::PathBuf;

use actix_web::web;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use docforge::inbound::http::health::HealthState;
use docforge::server::{ServerConfig, create_server};

/// `docforge` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "docforge",
    about = "Text-to-PDF conversion service with Prometheus metrics",
    version
)]
struct CliArgs {
    /// Socket address for the HTTP listener.
    #[arg(long = "bind", value_name = "addr", default_value = "0.0.0.0:8080")]
    bind_addr: SocketAddr,
    /// Directory receiving rendered artifacts; created when missing.
    #[arg(long = "output-dir", value_name = "path", default_value = "out")]
    output_dir: PathBuf,
    /// Namespace prefix of exported metrics.
    #[arg(long = "metrics-namespace", value_name = "name", default_value = "docforge")]
    metrics_namespace: String,
    /// Subsystem prefix of exported metrics.
    #[arg(long = "metrics-subsystem", value_name = "name", default_value = "pdf_service")]
    metrics_subsystem: String,
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    std::fs::create_dir_all(&args.output_dir)?;

    let config = ServerConfig::new(args.bind_addr, args.output_dir)
        .with_metrics_naming(args.metrics_namespace, args.metrics_subsystem);

    let health_state = web::Data::new(HealthState::new());
    info!(addr = %config.bind_addr(), "starting HTTP listener");
    let server = create_server(health_state, config)?;
    server.await
}
