//! HTTP request handlers.

use super::state::AppState;
use crate::metrics::MetricsSummary;
use crate::services::CampaignRunner;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Body of the campaign trigger acknowledgement.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Start a campaign in the background and acknowledge immediately.
///
/// The response never reflects campaign progress or failures.
pub async fn start_sales_calls(
    State(state): State<AppState>,
) -> (StatusCode, Json<MessageResponse>) {
    info!("Received request to start sales calls");
    spawn_campaign(state.runner.clone());

    (
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            message: "Sales calling campaign initiated.".to_string(),
        }),
    )
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend!".to_string(),
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSummary> {
    Json(state.metrics.summary())
}

/// Run a campaign detached from the caller.
///
/// A watcher task awaits the run so that a panic inside the campaign is
/// logged rather than silently dropped. The returned handle resolves once
/// the watcher has logged the outcome.
pub fn spawn_campaign(runner: Arc<CampaignRunner>) -> JoinHandle<()> {
    let campaign = tokio::spawn(async move { runner.run().await });

    tokio::spawn(async move {
        match campaign.await {
            Ok(summary) => info!(
                "Campaign complete: {} placed, {} failed, {} skipped",
                summary.placed(),
                summary.failed(),
                summary.skipped()
            ),
            Err(e) => error!("Error in sales calling campaign: {}", e),
        }
    })
}
