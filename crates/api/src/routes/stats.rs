//! Route definition for the `/stats` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Stats route, requires auth.
pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(stats::get_stats))
}
