//! Handlers for registration and login.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use goaltrack_core::error::CoreError;
use goaltrack_core::validation::{validate_login, validate_registration};
use goaltrack_db::models::user::{CreateUser, UserResponse};
use goaltrack_db::repositories::UserRepo;

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/register`.
///
/// All fields optional at the serde level so that missing values reach the
/// validators and come back as 400s with per-field messages.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/register
///
/// Create an account, fire off the welcome email, and return a bearer token.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let reg = validate_registration(
        input.name.as_deref(),
        input.email.as_deref(),
        input.password.as_deref(),
    )
    .map_err(AppError::Validation)?;

    if UserRepo::find_by_email(&state.pool, reg.email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "User with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(reg.password)
        .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: reg.name.to_string(),
            email: reg.email.to_string(),
            password_hash,
        },
    )
    .await?;

    // The user row is persisted; the welcome email runs detached and its
    // outcome never affects this response.
    goaltrack_mail::spawn_welcome(state.mailer.clone(), user.email.clone(), user.name.clone());

    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Registration successful! Welcome email sent.".to_string(),
            token,
            user: UserResponse::from(&user),
        }),
    ))
}

/// POST /api/login
///
/// Authenticate with email + password. Returns a fresh bearer token.
///
/// Unknown email and wrong password produce the same 400 so the response
/// does not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let login = validate_login(input.email.as_deref(), input.password.as_deref())
        .map_err(AppError::Validation)?;

    let user = UserRepo::find_by_email(&state.pool, login.email)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid email or password".into()))?;

    let password_valid = verify_password(login.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::BadRequest("Invalid email or password".into()));
    }

    let token = generate_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        message: "Login successful!".to_string(),
        token,
        user: UserResponse::from(&user),
    }))
}
