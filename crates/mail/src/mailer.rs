//! SMTP mailer built once at startup and injected into handlers.

use std::sync::Arc;

use lettre::message::{header, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::template;

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "Goal Tracker Pro <noreply@goaltrack.local>";

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

/// Configuration for the SMTP mailer.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" mailbox.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default                                     |
    /// |-----------------|----------|---------------------------------------------|
    /// | `SMTP_HOST`     | yes      | --                                          |
    /// | `SMTP_PORT`     | no       | `587`                                       |
    /// | `SMTP_FROM`     | no       | `Goal Tracker Pro <noreply@goaltrack.local>` |
    /// | `SMTP_USER`     | no       | --                                          |
    /// | `SMTP_PASSWORD` | no       | --                                          |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// Sends transactional email over a transport built once at startup.
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl Mailer {
    /// Build the SMTP transport from configuration.
    ///
    /// The transport holds a connection pool internally; constructing it once
    /// and sharing it is the intended lifecycle.
    pub fn connect(config: &EmailConfig) -> Result<Self, MailError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                .port(config.smtp_port);

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from_address: config.from_address.clone(),
        })
    }

    /// Send the welcome email (HTML with a plain-text alternative).
    pub async fn send_welcome(&self, to_email: &str, user_name: &str) -> Result<(), MailError> {
        let body = MultiPart::alternative()
            .singlepart(
                SinglePart::builder()
                    .header(header::ContentType::TEXT_PLAIN)
                    .body(template::welcome_text(user_name)),
            )
            .singlepart(
                SinglePart::builder()
                    .header(header::ContentType::TEXT_HTML)
                    .body(template::welcome_html(user_name)),
            );

        let email = Message::builder()
            .from(self.from_address.parse()?)
            .to(to_email.parse()?)
            .subject(template::WELCOME_SUBJECT)
            .multipart(body)
            .map_err(|e| MailError::Build(e.to_string()))?;

        self.transport.send(email).await?;
        Ok(())
    }
}

/// Dispatch the welcome email as a detached task.
///
/// The caller's request has already been persisted and answered by the time
/// this runs; delivery failures are logged and isolated from the request.
pub fn spawn_welcome(mailer: Option<Arc<Mailer>>, to_email: String, user_name: String) {
    let Some(mailer) = mailer else {
        tracing::debug!(to = %to_email, "Email not configured; skipping welcome email");
        return;
    };

    tokio::spawn(async move {
        match mailer.send_welcome(&to_email, &user_name).await {
            Ok(()) => tracing::info!(to = %to_email, "Welcome email sent"),
            Err(e) => tracing::warn!(to = %to_email, error = %e, "Failed to send welcome email"),
        }
    });
}
