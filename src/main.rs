//! Outbound Dialer - Main entry point
//!
//! Starts the HTTP server that triggers outbound calling campaigns and serves
//! the frontend.

use anyhow::Result;
use outbound_dialer::server::run_server;
use outbound_dialer::{AppState, Config};
use std::net::SocketAddr;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // RUST_LOG wins over LOG_LEVEL
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Voice-agent API: {}", config.vapi.api_base_url);
    match &config.sheets {
        Some(sheets) => info!("Contact sheet range: {}", sheets.full_range()),
        None => info!("Contact sheet not configured; campaigns will find no contacts"),
    }

    let state = AppState::from_config(&config)?;
    info!("Caller ID pool size: {}", state.caller_ids.len());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    run_server(state, addr).await?;

    info!("Outbound Dialer shutdown complete");
    Ok(())
}
