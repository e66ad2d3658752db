//! Handler for the `/test-email` endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use goaltrack_core::error::CoreError;
use goaltrack_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /test-email
///
/// Re-send the welcome email to the authenticated user. Unlike the
/// registration-time dispatch, this send is awaited so the caller learns
/// whether delivery worked.
pub async fn send_test_email(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid token".into())))?;

    let mailer = state.mailer.as_ref().ok_or_else(|| {
        AppError::ServiceUnavailable("Email delivery is not configured".into())
    })?;

    mailer
        .send_welcome(&user.email, &user.name)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to send test email: {e}")))?;

    tracing::info!(user_id = user.id, "Test email sent");

    Ok(Json(MessageResponse::new("Test email sent successfully!")))
}
