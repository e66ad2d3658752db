//! Outbound email: SMTP transport lifecycle and the welcome message.
//!
//! The transport is built once at startup and shared behind an `Arc`;
//! handlers either await a send directly (test email) or detach it with
//! [`spawn_welcome`] so the originating request never waits on SMTP.

pub mod mailer;
pub mod template;

pub use mailer::{spawn_welcome, EmailConfig, MailError, Mailer};
