//! Route definition for the `/streak/{id}` chart endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::streak;
use crate::state::AppState;

/// Streak chart route, requires auth.
pub fn router() -> Router<AppState> {
    Router::new().route("/streak/{id}", get(streak::get_streak))
}
