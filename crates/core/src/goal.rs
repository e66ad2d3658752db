//! Goal status and kind vocabularies.
//!
//! Both are stored as text columns with CHECK constraints; the constants
//! here are the single source of truth for the accepted values.

use crate::error::CoreError;

/// Goal is still being worked toward.
pub const STATUS_ACTIVE: &str = "active";
/// Goal reached its target day count (or was manually closed).
pub const STATUS_COMPLETED: &str = "completed";

/// All valid goal statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_COMPLETED];

/// Goal tracked over a one-week window.
pub const KIND_WEEKLY: &str = "weekly";
/// Goal tracked over a one-month window.
pub const KIND_MONTHLY: &str = "monthly";

/// All valid goal kinds.
pub const VALID_KINDS: &[&str] = &[KIND_WEEKLY, KIND_MONTHLY];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown status: '{status}'. Valid statuses: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate that a kind string is one of the accepted values.
pub fn validate_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown goal type: '{kind}'. Valid types: {}",
            VALID_KINDS.join(", ")
        )))
    }
}
