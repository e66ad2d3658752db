//! Request handlers, one module per resource.

pub mod auth;
pub mod email;
pub mod goals;
pub mod stats;
pub mod streak;
