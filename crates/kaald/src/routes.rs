//! API routes for kaald

use crate::server::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use kaal_common::{Reply, EMPTY_COMMAND_REPLY};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

type AppStateArc = Arc<AppState>;

/// Body of POST /api/command
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub text: String,
}

/// Body of GET /v1/health
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub sites: usize,
}

// ============================================================================
// Command Routes
// ============================================================================

pub fn command_routes() -> Router<AppStateArc> {
    Router::new().route("/api/command", post(run_command))
}

async fn run_command(
    State(state): State<AppStateArc>,
    payload: Result<Json<CommandRequest>, JsonRejection>,
) -> (StatusCode, Json<Reply>) {
    // Unparseable bodies are treated like an empty command
    let text = match payload {
        Ok(Json(req)) => req.text,
        Err(rejection) => {
            debug!("  Rejected command body: {}", rejection);
            String::new()
        }
    };

    let text = text.trim();
    if text.is_empty() {
        return (StatusCode::BAD_REQUEST, Json(Reply::text(EMPTY_COMMAND_REPLY)));
    }

    info!("  Command: {:?}", text);
    let reply = state.dispatcher.handle_command(text).await;
    (StatusCode::OK, Json(reply))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        sites: state.dispatcher.sites().len(),
    })
}
