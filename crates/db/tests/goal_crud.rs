//! Integration tests for the user/goal repository layer.
//!
//! Exercises the repositories against a real database:
//! - user creation and unique-email enforcement
//! - goal creation defaults and owner-scoped reads
//! - progress recording (entry append + counter update in one transaction)
//! - cascade delete of progress history

use chrono::{Duration, Utc};
use goaltrack_core::goal::{KIND_WEEKLY, STATUS_ACTIVE, STATUS_COMPLETED};
use goaltrack_core::progress::MarkOutcome;
use goaltrack_db::models::goal::CreateGoal;
use goaltrack_db::models::user::CreateUser;
use goaltrack_db::repositories::{GoalRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
    }
}

fn new_goal(user_id: i64, title: &str) -> CreateGoal {
    CreateGoal {
        user_id,
        title: title.to_string(),
        description: None,
        kind: KIND_WEEKLY.to_string(),
        target_days: 5,
        end_date: Utc::now() + Duration::days(7),
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_and_find_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("ada@example.com"))
        .await
        .expect("user creation should succeed");

    let by_id = UserRepo::find_by_id(&pool, user.id)
        .await
        .expect("query should succeed")
        .expect("user should exist");
    assert_eq!(by_id.email, "ada@example.com");

    let by_email = UserRepo::find_by_email(&pool, "ada@example.com")
        .await
        .expect("query should succeed")
        .expect("user should exist");
    assert_eq!(by_email.id, user.id);
}

#[sqlx::test]
async fn duplicate_email_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@example.com"))
        .await
        .expect("first creation should succeed");

    let err = UserRepo::create(&pool, &new_user("dup@example.com"))
        .await
        .expect_err("second creation must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected a database error, got: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn new_goal_starts_with_zeroed_counters(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("g1@example.com"))
        .await
        .expect("user creation should succeed");

    let goal = GoalRepo::create(&pool, &new_goal(user.id, "Morning run"))
        .await
        .expect("goal creation should succeed");

    assert_eq!(goal.completed_days, 0);
    assert_eq!(goal.streak, 0);
    assert_eq!(goal.status, STATUS_ACTIVE);
}

#[sqlx::test]
async fn list_returns_newest_first(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("g2@example.com"))
        .await
        .expect("user creation should succeed");

    let first = GoalRepo::create(&pool, &new_goal(user.id, "First"))
        .await
        .expect("goal creation should succeed");
    let second = GoalRepo::create(&pool, &new_goal(user.id, "Second"))
        .await
        .expect("goal creation should succeed");

    let goals = GoalRepo::list_for_user(&pool, user.id)
        .await
        .expect("list should succeed");

    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].id, second.id);
    assert_eq!(goals[1].id, first.id);
}

#[sqlx::test]
async fn reads_are_scoped_to_the_owner(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("owner@example.com"))
        .await
        .expect("user creation should succeed");
    let intruder = UserRepo::create(&pool, &new_user("intruder@example.com"))
        .await
        .expect("user creation should succeed");

    let goal = GoalRepo::create(&pool, &new_goal(owner.id, "Private goal"))
        .await
        .expect("goal creation should succeed");

    let found = GoalRepo::find_for_user(&pool, goal.id, intruder.id)
        .await
        .expect("query should succeed");
    assert!(found.is_none(), "another user's goal must look missing");

    let deleted = GoalRepo::delete_for_user(&pool, goal.id, intruder.id)
        .await
        .expect("query should succeed");
    assert!(!deleted, "another user must not be able to delete the goal");
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn record_progress_appends_entry_and_updates_counters(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("p1@example.com"))
        .await
        .expect("user creation should succeed");
    let goal = GoalRepo::create(&pool, &new_goal(user.id, "Read"))
        .await
        .expect("goal creation should succeed");

    let outcome = MarkOutcome {
        completed_days: 1,
        streak: 1,
        status: STATUS_ACTIVE,
        marked_at: Utc::now(),
    };
    let updated = GoalRepo::record_progress(&pool, goal.id, &outcome)
        .await
        .expect("recording should succeed")
        .expect("goal should exist");

    assert_eq!(updated.completed_days, 1);
    assert_eq!(updated.streak, 1);

    let entries = GoalRepo::list_progress(&pool, goal.id)
        .await
        .expect("listing should succeed");
    assert_eq!(entries.len(), 1);
    assert!(entries[0].completed);

    let last = GoalRepo::last_progress(&pool, goal.id)
        .await
        .expect("query should succeed")
        .expect("entry should exist");
    assert_eq!(last.id, entries[0].id);
}

#[sqlx::test]
async fn completed_status_is_persisted_by_record_progress(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("p2@example.com"))
        .await
        .expect("user creation should succeed");
    let mut input = new_goal(user.id, "One-shot");
    input.target_days = 1;
    let goal = GoalRepo::create(&pool, &input)
        .await
        .expect("goal creation should succeed");

    let outcome = MarkOutcome {
        completed_days: 1,
        streak: 1,
        status: STATUS_COMPLETED,
        marked_at: Utc::now(),
    };
    let updated = GoalRepo::record_progress(&pool, goal.id, &outcome)
        .await
        .expect("recording should succeed")
        .expect("goal should exist");

    assert_eq!(updated.status, STATUS_COMPLETED);
}

#[sqlx::test]
async fn set_status_overwrites_without_touching_counters(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("p3@example.com"))
        .await
        .expect("user creation should succeed");
    let goal = GoalRepo::create(&pool, &new_goal(user.id, "Reopenable"))
        .await
        .expect("goal creation should succeed");

    let updated = GoalRepo::set_status(&pool, goal.id, STATUS_COMPLETED)
        .await
        .expect("update should succeed")
        .expect("goal should exist");

    assert_eq!(updated.status, STATUS_COMPLETED);
    assert_eq!(updated.completed_days, 0);
    assert_eq!(updated.streak, 0);
}

#[sqlx::test]
async fn deleting_a_goal_cascades_to_progress(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("p4@example.com"))
        .await
        .expect("user creation should succeed");
    let goal = GoalRepo::create(&pool, &new_goal(user.id, "Short-lived"))
        .await
        .expect("goal creation should succeed");

    let outcome = MarkOutcome {
        completed_days: 1,
        streak: 1,
        status: STATUS_ACTIVE,
        marked_at: Utc::now(),
    };
    GoalRepo::record_progress(&pool, goal.id, &outcome)
        .await
        .expect("recording should succeed");

    let deleted = GoalRepo::delete_for_user(&pool, goal.id, user.id)
        .await
        .expect("delete should succeed");
    assert!(deleted);

    let entries = GoalRepo::list_progress(&pool, goal.id)
        .await
        .expect("listing should succeed");
    assert!(entries.is_empty(), "progress rows must be cascade-deleted");
}
