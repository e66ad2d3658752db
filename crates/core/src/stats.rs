//! Per-user goal statistics.

use serde::Serialize;

use crate::goal::{STATUS_ACTIVE, STATUS_COMPLETED};

/// Aggregate counters across all of a user's goals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub total_goals: i64,
    pub completed_goals: i64,
    pub in_progress_goals: i64,
    /// Maximum current streak across all goals; 0 when there are none.
    pub best_streak: i32,
}

/// Compute stats over `(status, streak)` pairs for a user's goals.
pub fn compute_stats<'a, I>(goals: I) -> GoalStats
where
    I: IntoIterator<Item = (&'a str, i32)>,
{
    let mut stats = GoalStats {
        total_goals: 0,
        completed_goals: 0,
        in_progress_goals: 0,
        best_streak: 0,
    };

    for (status, streak) in goals {
        stats.total_goals += 1;
        if status == STATUS_COMPLETED {
            stats.completed_goals += 1;
        } else if status == STATUS_ACTIVE {
            stats.in_progress_goals += 1;
        }
        stats.best_streak = stats.best_streak.max(streak);
    }

    stats
}
