//! Handler for the `/stats` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use goaltrack_core::stats::{compute_stats, GoalStats};
use goaltrack_db::repositories::GoalRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `GET /stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: GoalStats,
}

/// GET /stats
///
/// Aggregate counters over all of the authenticated user's goals.
pub async fn get_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let goals = GoalRepo::list_for_user(&state.pool, auth.user_id).await?;

    let stats = compute_stats(goals.iter().map(|g| (g.status.as_str(), g.streak)));

    Ok(Json(StatsResponse { stats }))
}
