//! HTTP server for the outbound dialer.
//!
//! Exposes the campaign trigger, a couple of probes, and the built frontend.
//! Any path that is not an API route falls through to the frontend directory,
//! and unknown paths there resolve to its `index.html`.

pub mod handlers;
pub mod state;

pub use handlers::spawn_campaign;
pub use state::AppState;

use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let index = state.frontend_dir.join("index.html");
    let frontend = ServeDir::new(&state.frontend_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/start-sales-calls", post(handlers::start_sales_calls))
        .route("/api/hello", get(handlers::hello))
        .route("/api/metrics", get(handlers::metrics))
        .route("/health", get(handlers::health))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process exits.
pub async fn run_server(state: AppState, addr: SocketAddr) -> Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server is running on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
