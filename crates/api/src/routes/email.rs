//! Route definition for the `/test-email` endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::email;
use crate::state::AppState;

/// Test-email route, requires auth.
pub fn router() -> Router<AppState> {
    Router::new().route("/test-email", post(email::send_test_email))
}
