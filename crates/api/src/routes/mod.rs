//! Route definitions for the `/api` prefix.

pub mod auth;
pub mod email;
pub mod goals;
pub mod health;
pub mod stats;
pub mod streak;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /health        service + database health (public)
/// POST   /register      create account (public)
/// POST   /login         authenticate (public)
/// GET    /stats         per-user goal statistics
/// GET    /goals         list goals, newest first
/// POST   /goals         create goal
/// GET    /goals/{id}    fetch one goal
/// PUT    /goals/{id}    mark progress and/or set status
/// DELETE /goals/{id}    delete goal
/// GET    /streak/{id}   14-day cumulative chart series
/// POST   /test-email    re-send the welcome email
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(goals::router())
        .merge(stats::router())
        .merge(streak::router())
        .merge(email::router())
}
