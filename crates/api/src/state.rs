use std::sync::Arc;

use goaltrack_mail::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
/// Both resources are created once in `main.rs` and injected here rather
/// than reached for as globals.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: goaltrack_db::DbPool,
    /// Server configuration (JWT secret, timeouts, CORS).
    pub config: Arc<ServerConfig>,
    /// SMTP mailer; `None` when `SMTP_HOST` is not configured.
    pub mailer: Option<Arc<Mailer>>,
}
