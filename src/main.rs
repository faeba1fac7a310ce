//! Personnel Engine HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use personnel_engine::api::{AppState, create_router};
use personnel_engine::config::ConfigLoader;
use personnel_engine::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "personnel-engine",
    about = "Serve employee records, hierarchy labels, and workforce statistics",
    version
)]
struct Cli {
    /// Directory holding organization.yaml, employee.yaml, and statistics.yaml
    #[arg(long, env = "PERSONNEL_CONFIG_DIR", default_value = "./config/airport")]
    config_dir: PathBuf,
    /// Address the HTTP server binds to
    #[arg(long, env = "PERSONNEL_BIND_ADDR", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "PERSONNEL_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let config = ConfigLoader::load(&cli.config_dir)?;
    info!(config_dir = %cli.config_dir.display(), "Configuration loaded");

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(address = %cli.bind, "Personnel engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
