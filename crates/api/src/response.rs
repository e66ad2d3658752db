//! Shared response types for API handlers.

use serde::Serialize;

/// Plain `{ "message": ... }` acknowledgement body.
///
/// Used by endpoints whose success payload is only a confirmation line
/// (delete goal, test email).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
