//! Handlers for the `/goals` resource.
//!
//! Every operation is scoped to the authenticated user; a goal owned by
//! someone else behaves exactly like a missing one (404).

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use goaltrack_core::error::CoreError;
use goaltrack_core::goal::validate_status;
use goaltrack_core::progress::mark_progress;
use goaltrack_core::types::{DbId, Timestamp};
use goaltrack_core::validation::validate_new_goal;
use goaltrack_db::models::goal::{CreateGoal, Goal, ProgressEntry};
use goaltrack_db::repositories::GoalRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /goals`.
///
/// Fields are optional at the serde level so missing values surface as
/// per-field 400s rather than body-deserialization failures.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub target_days: Option<i32>,
    pub end_date: Option<Timestamp>,
}

/// Request body for `PUT /goals/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalRequest {
    /// When true, record today's progress before any status overwrite.
    pub mark_progress: Option<bool>,
    /// Direct status overwrite (`"active"` or `"completed"`), no guard.
    pub status: Option<String>,
}

/// A goal with its full progress history embedded, as returned to clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDetail {
    #[serde(flatten)]
    pub goal: Goal,
    pub progress_history: Vec<ProgressEntry>,
}

/// Response body for `GET /goals`.
#[derive(Debug, Serialize)]
pub struct GoalsResponse {
    pub goals: Vec<GoalDetail>,
}

/// Response body for single-goal reads.
#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub goal: GoalDetail,
}

/// Response body for goal mutations.
#[derive(Debug, Serialize)]
pub struct GoalMessageResponse {
    pub message: String,
    pub goal: GoalDetail,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /goals
///
/// List the authenticated user's goals, newest first, each with its full
/// progress history.
pub async fn list_goals(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let goals = GoalRepo::list_for_user(&state.pool, auth.user_id).await?;
    let entries = GoalRepo::list_progress_for_user(&state.pool, auth.user_id).await?;

    let mut by_goal: HashMap<DbId, Vec<ProgressEntry>> = HashMap::new();
    for entry in entries {
        by_goal.entry(entry.goal_id).or_default().push(entry);
    }

    let goals = goals
        .into_iter()
        .map(|goal| GoalDetail {
            progress_history: by_goal.remove(&goal.id).unwrap_or_default(),
            goal,
        })
        .collect();

    Ok(Json(GoalsResponse { goals }))
}

/// GET /goals/{id}
pub async fn get_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let goal = GoalRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Goal", id }))?;

    let goal = with_history(&state, goal).await?;
    Ok(Json(GoalResponse { goal }))
}

/// POST /goals
///
/// Create a goal. Counters start at zero and the status starts `active`.
pub async fn create_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateGoalRequest>,
) -> AppResult<impl IntoResponse> {
    let new_goal = validate_new_goal(
        input.title.as_deref(),
        input.kind.as_deref(),
        input.target_days,
        input.end_date,
    )
    .map_err(AppError::Validation)?;

    let goal = GoalRepo::create(
        &state.pool,
        &CreateGoal {
            user_id: auth.user_id,
            title: new_goal.title.to_string(),
            description: input.description.clone(),
            kind: new_goal.kind.to_string(),
            target_days: new_goal.target_days,
            end_date: new_goal.end_date,
        },
    )
    .await?;

    tracing::info!(user_id = auth.user_id, goal_id = goal.id, "Goal created");

    let goal = with_history(&state, goal).await?;
    Ok((
        StatusCode::CREATED,
        Json(GoalMessageResponse {
            message: "Goal created successfully!".to_string(),
            goal,
        }),
    ))
}

/// PUT /goals/{id}
///
/// Mark today's progress and/or overwrite the status. Marking runs the
/// progress engine against a goal fetched fresh from storage and persists
/// the outcome; a second mark on the same calendar day is rejected with 400
/// and changes nothing.
pub async fn update_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGoalRequest>,
) -> AppResult<impl IntoResponse> {
    let mut goal = GoalRepo::find_for_user(&state.pool, id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Goal", id }))?;

    let marked = input.mark_progress.unwrap_or(false);

    if marked {
        let last = GoalRepo::last_progress(&state.pool, goal.id).await?;
        let outcome = mark_progress(
            last.map(|entry| entry.marked_at),
            goal.completed_days,
            goal.streak,
            goal.target_days,
            Utc::now(),
        )?;

        goal = GoalRepo::record_progress(&state.pool, goal.id, &outcome)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Goal", id }))?;

        tracing::info!(
            user_id = auth.user_id,
            goal_id = goal.id,
            completed_days = goal.completed_days,
            streak = goal.streak,
            "Progress marked"
        );
    }

    if let Some(ref status) = input.status {
        validate_status(status)?;
        goal = GoalRepo::set_status(&state.pool, goal.id, status)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound { entity: "Goal", id }))?;

        tracing::info!(
            user_id = auth.user_id,
            goal_id = goal.id,
            status = %status,
            "Goal status set"
        );
    }

    let message = if marked {
        "Progress marked!"
    } else {
        "Goal updated!"
    };

    let goal = with_history(&state, goal).await?;
    Ok(Json(GoalMessageResponse {
        message: message.to_string(),
        goal,
    }))
}

/// DELETE /goals/{id}
pub async fn delete_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GoalRepo::delete_for_user(&state.pool, id, auth.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Goal", id }));
    }

    tracing::info!(user_id = auth.user_id, goal_id = id, "Goal deleted");

    Ok(Json(MessageResponse::new("Goal deleted successfully")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Attach a goal's progress history for the response body.
async fn with_history(state: &AppState, goal: Goal) -> Result<GoalDetail, AppError> {
    let progress_history = GoalRepo::list_progress(&state.pool, goal.id).await?;
    Ok(GoalDetail {
        goal,
        progress_history,
    })
}
