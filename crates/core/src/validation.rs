//! Typed request-input validation.
//!
//! Each `validate_*` function checks one request shape up front and returns
//! either the parsed values or the full list of per-field failures. Checks
//! always run before any write.

use serde::Serialize;

use crate::goal::VALID_KINDS;
use crate::types::Timestamp;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A single failed validation check, tied to the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validated registration input.
#[derive(Debug, PartialEq, Eq)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Validated login input.
#[derive(Debug, PartialEq, Eq)]
pub struct Login<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Validated goal-creation input.
#[derive(Debug, PartialEq, Eq)]
pub struct NewGoal<'a> {
    pub title: &'a str,
    pub kind: &'a str,
    pub target_days: i32,
    pub end_date: Timestamp,
}

/// Treat a missing or all-whitespace field as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Validate registration input: all fields required, password length policy.
pub fn validate_registration<'a>(
    name: Option<&'a str>,
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<Registration<'a>, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = present(name);
    if name.is_none() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    let email = present(email);
    if email.is_none() {
        errors.push(FieldError::new("email", "Email is required"));
    }

    let password = password.filter(|p| !p.is_empty());
    match password {
        None => errors.push(FieldError::new("password", "Password is required")),
        Some(p) if p.len() < MIN_PASSWORD_LEN => errors.push(FieldError::new(
            "password",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        )),
        Some(_) => {}
    }

    match (name, email, password) {
        (Some(name), Some(email), Some(password)) if errors.is_empty() => Ok(Registration {
            name,
            email,
            password,
        }),
        _ => Err(errors),
    }
}

/// Validate login input: both fields required.
pub fn validate_login<'a>(
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<Login<'a>, Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = present(email);
    if email.is_none() {
        errors.push(FieldError::new("email", "Email is required"));
    }

    let password = password.filter(|p| !p.is_empty());
    if password.is_none() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    match (email, password) {
        (Some(email), Some(password)) => Ok(Login { email, password }),
        _ => Err(errors),
    }
}

/// Validate goal-creation input: title/kind/targetDays/endDate required,
/// kind restricted to the known vocabulary, target strictly positive.
pub fn validate_new_goal<'a>(
    title: Option<&'a str>,
    kind: Option<&'a str>,
    target_days: Option<i32>,
    end_date: Option<Timestamp>,
) -> Result<NewGoal<'a>, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = present(title);
    if title.is_none() {
        errors.push(FieldError::new("title", "Title is required"));
    }

    let kind = present(kind);
    match kind {
        None => errors.push(FieldError::new("type", "Goal type is required")),
        Some(k) if !VALID_KINDS.contains(&k) => errors.push(FieldError::new(
            "type",
            format!("Goal type must be one of: {}", VALID_KINDS.join(", ")),
        )),
        Some(_) => {}
    }

    match target_days {
        None => errors.push(FieldError::new("targetDays", "Target days is required")),
        Some(d) if d <= 0 => errors.push(FieldError::new(
            "targetDays",
            "Target days must be a positive number",
        )),
        Some(_) => {}
    }

    if end_date.is_none() {
        errors.push(FieldError::new("endDate", "End date is required"));
    }

    match (title, kind, target_days, end_date) {
        (Some(title), Some(kind), Some(target_days), Some(end_date)) if errors.is_empty() => {
            Ok(NewGoal {
                title,
                kind,
                target_days,
                end_date,
            })
        }
        _ => Err(errors),
    }
}
