//! Route definitions for the `/goals` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::goals;
use crate::state::AppState;

/// Goal CRUD routes, all requiring auth.
///
/// ```text
/// GET    /goals         -> list_goals
/// POST   /goals         -> create_goal
/// GET    /goals/{id}    -> get_goal
/// PUT    /goals/{id}    -> update_goal (mark progress / set status)
/// DELETE /goals/{id}    -> delete_goal
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/goals", get(goals::list_goals).post(goals::create_goal))
        .route(
            "/goals/{id}",
            get(goals::get_goal)
                .put(goals::update_goal)
                .delete(goals::delete_goal),
        )
}
