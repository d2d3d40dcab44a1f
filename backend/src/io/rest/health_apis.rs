//! Liveness and readiness probes

use axum::{extract::State, routing::get, Router};
use tracing::error;

use crate::error::ApiError;
use crate::AppState;

pub const HEALTHY: &str = "Healthy";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/alive", get(alive))
}

/// Ready to serve: storage must answer
async fn health(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    state.user_service.check_storage().await.map_err(|e| {
        error!("Health check failed: {}", e);
        e
    })?;
    Ok(HEALTHY)
}

/// Process is up; no dependencies are checked
async fn alive() -> &'static str {
    HEALTHY
}
