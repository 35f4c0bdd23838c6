//! Field validation for the booking form.
//!
//! Each rule returns `Some(message)` on failure so callers can render the
//! message inline next to the offending field.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use serde::Serialize;

const MAX_EMAIL_LEN: usize = 254;

/// Inline validation messages keyed by form field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("form has invalid fields")]
pub struct FieldErrors {
    pub chairperson_name: Option<String>,
    pub host_email: Option<String>,
    pub participants: Option<String>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chairperson_name.is_none() && self.host_email.is_none() && self.participants.is_none()
    }
}

/// `true` when `email` looks like `local@domain.tld` with no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') && !domain.contains("..")
}

/// Validate an email field that must be present.
#[must_use]
pub fn validate_email(email: &str, field_name: &str) -> Option<String> {
    if email.trim().is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if !is_valid_email(email) {
        return Some(format!("{field_name} must be a valid email address"));
    }
    None
}

/// Validate the chairperson name against a minimum trimmed length in characters.
#[must_use]
pub fn validate_chairperson_name(name: &str, min_len: usize) -> Option<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some("Chairperson is required".to_owned());
    }
    if trimmed.chars().count() < min_len {
        return Some(format!("Chairperson must be at least {min_len} characters"));
    }
    None
}

/// Validate every participant; reports the first offending entry.
#[must_use]
pub fn validate_participants<'a>(emails: impl IntoIterator<Item = &'a str>) -> Option<String> {
    emails
        .into_iter()
        .find(|e| !is_valid_email(e))
        .map(|bad| format!("Invalid participant email: {bad}"))
}
