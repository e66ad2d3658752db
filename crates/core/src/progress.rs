//! Progress-marking engine.
//!
//! Owns the rules for recording a day's progress against a goal: one mark
//! per calendar day, streak bookkeeping, and automatic completion once the
//! target day count is reached. Operates on plain values so callers decide
//! how the result is persisted.

use crate::error::CoreError;
use crate::goal::{STATUS_ACTIVE, STATUS_COMPLETED};
use crate::types::Timestamp;

/// Result of successfully marking a day's progress.
///
/// Callers persist the new counters, append a progress entry at
/// [`MarkOutcome::marked_at`], and overwrite the goal status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkOutcome {
    /// New completed-day total (always the previous total plus one).
    pub completed_days: i32,
    /// Updated consecutive-day streak.
    pub streak: i32,
    /// `"completed"` once the target is reached, `"active"` otherwise.
    pub status: &'static str,
    /// Timestamp to record for the new progress entry.
    pub marked_at: Timestamp,
}

/// Mark progress on a goal for the current day.
///
/// `last_entry` is the timestamp of the most recent progress entry, if any.
/// Returns [`CoreError::Conflict`] without mutating anything when an entry
/// already exists for `now`'s calendar day.
///
/// Streak rules, driven by the floored whole-day gap since `last_entry`:
/// - no prior entry: streak becomes 1
/// - gap of exactly 1 day: streak increments
/// - gap of more than 1 day: streak resets to 1
/// - gap of 0 days (crossed midnight in under 24h): streak is left unchanged
pub fn mark_progress(
    last_entry: Option<Timestamp>,
    completed_days: i32,
    streak: i32,
    target_days: i32,
    now: Timestamp,
) -> Result<MarkOutcome, CoreError> {
    if let Some(last) = last_entry {
        if last.date_naive() == now.date_naive() {
            return Err(CoreError::Conflict(
                "Progress already marked for today".to_string(),
            ));
        }
    }

    let completed_days = completed_days + 1;

    let streak = match last_entry {
        None => 1,
        Some(last) => {
            let days_diff = (now - last).num_days();
            if days_diff == 1 {
                streak + 1
            } else if days_diff > 1 {
                1
            } else {
                streak
            }
        }
    };

    let status = if completed_days >= target_days {
        STATUS_COMPLETED
    } else {
        STATUS_ACTIVE
    };

    Ok(MarkOutcome {
        completed_days,
        streak,
        status,
        marked_at: now,
    })
}
