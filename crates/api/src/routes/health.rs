use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::Utc;
use goaltrack_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status: `"ok"` or `"degraded"`.
    pub status: &'static str,
    /// Time the probe ran.
    pub timestamp: Timestamp,
    /// Whether the database answered the liveness probe.
    pub db_healthy: bool,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = goaltrack_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        timestamp: Utc::now(),
        db_healthy,
    })
}

/// Mount health check routes (under the `/api` prefix).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
