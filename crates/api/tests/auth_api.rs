//! HTTP-level integration tests for registration, login, and token auth.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register a user via the API, asserting success, and return the response
/// JSON (contains `token` and `user`).
async fn register_user(app: axum::Router, name: &str, email: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "name": name,
        "email": email,
        "password": "hunter2-secure"
    });
    let response = post_json(app, "/api/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Count rows in `users` for the given email.
async fn count_users_with_email(pool: &PgPool, email: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("count query should succeed")
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn register_returns_token_and_safe_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let json = register_user(app, "Ada", "ada@example.com").await;

    assert!(json["token"].is_string(), "response must contain a token");
    assert_eq!(json["user"]["name"], "Ada");
    assert_eq!(json["user"]["email"], "ada@example.com");
    // The password hash must never appear in any response shape.
    assert!(json["user"].get("password").is_none());
    assert!(json["user"].get("passwordHash").is_none());
    assert!(json["user"].get("password_hash").is_none());

    assert_eq!(count_users_with_email(&pool, "ada@example.com").await, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_duplicate_email_is_rejected_without_a_second_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    register_user(app.clone(), "Ada", "dup@example.com").await;

    let body = serde_json::json!({
        "name": "Imposter",
        "email": "dup@example.com",
        "password": "different-pass"
    });
    let response = post_json(app, "/api/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("already exists"));

    assert_eq!(count_users_with_email(&pool, "dup@example.com").await, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_short_password_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Ada",
        "email": "short@example.com",
        "password": "abc"
    });
    let response = post_json(app, "/api/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["fields"][0]["field"], "password");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_missing_fields_are_all_reported(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(app, "/api/register", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fields"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn login_returns_fresh_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "Ada", "login@example.com").await;

    let body = serde_json::json!({
        "email": "login@example.com",
        "password": "hunter2-secure"
    });
    let response = post_json(app, "/api/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["email"], "login@example.com");
    assert_eq!(json["message"], "Login successful!");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "Ada", "wrongpw@example.com").await;

    let body = serde_json::json!({
        "email": "wrongpw@example.com",
        "password": "not-the-password"
    });
    let response = post_json(app, "/api/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_unknown_email_gets_the_same_rejection(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "email": "ghost@example.com",
        "password": "whatever-pass"
    });
    let response = post_json(app, "/api/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email or password");
}

// ---------------------------------------------------------------------------
// Token enforcement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_route_without_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/stats").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_route_with_garbage_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/stats", "not-a-real-token").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn registered_token_grants_access(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = register_user(app.clone(), "Ada", "access@example.com").await;
    let token = json["token"].as_str().unwrap();

    let response = get_auth(app, "/api/stats", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}
