//! Repository for the `goals` and `goal_progress` tables.
//!
//! Every read and delete is scoped to the owning user, so a goal that exists
//! but belongs to someone else is indistinguishable from a missing one.

use goaltrack_core::progress::MarkOutcome;
use goaltrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::goal::{CreateGoal, Goal, ProgressEntry};

/// Column list shared across goal queries.
const COLUMNS: &str = "id, user_id, title, description, kind, target_days, \
                       completed_days, status, streak, end_date, created_at";

/// Column list shared across progress queries.
const PROGRESS_COLUMNS: &str = "id, goal_id, marked_at, completed";

/// Provides CRUD and progress operations for goals.
pub struct GoalRepo;

impl GoalRepo {
    /// Insert a new goal, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGoal) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals (user_id, title, description, kind, target_days, end_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.kind)
            .bind(input.target_days)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a goal by ID, scoped to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all of a user's goals, newest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM goals
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a goal (and, via cascade, its progress history), scoped to its
    /// owner. Returns `true` if a row was deleted.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a goal's progress entries in insertion order.
    pub async fn list_progress(
        pool: &PgPool,
        goal_id: DbId,
    ) -> Result<Vec<ProgressEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {PROGRESS_COLUMNS} FROM goal_progress
             WHERE goal_id = $1
             ORDER BY id"
        );
        sqlx::query_as::<_, ProgressEntry>(&query)
            .bind(goal_id)
            .fetch_all(pool)
            .await
    }

    /// List progress entries for every goal a user owns, grouped by goal in
    /// insertion order. One query instead of one per goal.
    pub async fn list_progress_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProgressEntry>, sqlx::Error> {
        let query = "SELECT p.id, p.goal_id, p.marked_at, p.completed
                     FROM goal_progress p
                     JOIN goals g ON g.id = p.goal_id
                     WHERE g.user_id = $1
                     ORDER BY p.goal_id, p.id";
        sqlx::query_as::<_, ProgressEntry>(query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// The most recent progress entry for a goal, if any.
    pub async fn last_progress(
        pool: &PgPool,
        goal_id: DbId,
    ) -> Result<Option<ProgressEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {PROGRESS_COLUMNS} FROM goal_progress
             WHERE goal_id = $1
             ORDER BY id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, ProgressEntry>(&query)
            .bind(goal_id)
            .fetch_optional(pool)
            .await
    }

    /// Persist a [`MarkOutcome`]: append the progress entry and update the
    /// goal's counters in one transaction, keeping `completed_days` equal to
    /// the number of progress rows.
    ///
    /// Returns `None` if the goal no longer exists.
    pub async fn record_progress(
        pool: &PgPool,
        goal_id: DbId,
        outcome: &MarkOutcome,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "INSERT INTO goal_progress (goal_id, marked_at, completed)
             VALUES ($1, $2, TRUE)",
        )
        .bind(goal_id)
        .bind(outcome.marked_at)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "UPDATE goals SET
                completed_days = $2,
                streak = $3,
                status = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let goal = sqlx::query_as::<_, Goal>(&query)
            .bind(goal_id)
            .bind(outcome.completed_days)
            .bind(outcome.streak)
            .bind(outcome.status)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(goal)
    }

    /// Overwrite a goal's status. No guard and no effect on streak/counters.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
