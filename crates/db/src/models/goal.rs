//! Goal and progress-entry models and DTOs.

use goaltrack_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `goals` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// `"weekly"` or `"monthly"`; serialized as `type` on the wire.
    #[serde(rename = "type")]
    pub kind: String,
    pub target_days: i32,
    pub completed_days: i32,
    pub status: String,
    pub streak: i32,
    pub end_date: Timestamp,
    pub created_at: Timestamp,
}

/// A row from the `goal_progress` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: DbId,
    pub goal_id: DbId,
    /// Moment the day's progress was marked; serialized as `date`.
    #[serde(rename = "date")]
    pub marked_at: Timestamp,
    pub completed: bool,
}

/// DTO for inserting a new goal.
#[derive(Debug)]
pub struct CreateGoal {
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub kind: String,
    pub target_days: i32,
    pub end_date: Timestamp,
}
