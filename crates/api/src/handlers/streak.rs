//! Handler for the `/streak/{id}` chart endpoint.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use goaltrack_core::chart::{chart_series, CHART_WINDOW_DAYS};
use goaltrack_core::error::CoreError;
use goaltrack_core::types::DbId;
use goaltrack_db::repositories::GoalRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Response body for `GET /streak/{id}`: two aligned 14-point sequences.
#[derive(Debug, Serialize)]
pub struct StreakResponse {
    pub labels: Vec<String>,
    pub data: Vec<i64>,
}

/// GET /streak/{id}
///
/// Cumulative progress counts over the last 14 calendar days, chart-ready.
pub async fn get_streak(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let goal = GoalRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Goal", id }))?;

    let entries = GoalRepo::list_progress(&state.pool, goal.id).await?;
    let timestamps: Vec<_> = entries.iter().map(|entry| entry.marked_at).collect();

    let series = chart_series(&timestamps, CHART_WINDOW_DAYS, Utc::now());

    Ok(Json(StreakResponse {
        labels: series.labels,
        data: series.data,
    }))
}
