//! Collaborator seams: the directory lookup and the booking endpoint.
//!
//! DESIGN
//! ======
//! Both collaborators are traits so the form can be driven by browser
//! transports, `reqwest`, or test mocks. Browser futures are `!Send`, so the
//! traits opt out of the `Send` bound.
//!
//! ERROR HANDLING
//! ==============
//! A failed lookup only degrades the pickers. A failed booking is turned into
//! a user-facing message via [`SubmissionError::display_message`], which never
//! returns an empty string.

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use serde::Deserialize;
use serde_json::Value;

use crate::candidate::Candidate;
use crate::payload::BookingPayload;

/// Notification text used when a failure carries no usable message.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

// =============================================================================
// ERRORS
// =============================================================================

/// Errors produced while fetching directory candidates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The request never produced a response.
    #[error("directory request failed: {0}")]
    Transport(String),

    /// The directory answered with a non-success status.
    #[error("directory responded with status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("directory response parse failed: {0}")]
    Decode(String),
}

/// Errors produced by a booking attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    /// The booking endpoint refused the request.
    #[error("booking rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("booking request failed: {0}")]
    Transport(String),

    /// The success body could not be decoded.
    #[error("booking response parse failed: {0}")]
    Decode(String),
}

impl SubmissionError {
    /// Build a rejection from a status code and raw response body.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, message: extract_error_message_text(body) }
    }

    /// Message to show in the failure notification.
    #[must_use]
    pub fn display_message(&self) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } if !message.trim().is_empty() => message.trim().to_owned(),
            _ => FALLBACK_MESSAGE.to_owned(),
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Checks `message`, `error.message`, `error` (string), then `detail`.
#[must_use]
pub fn extract_error_message(body: &Value) -> Option<String> {
    let candidates = [
        body.get("message"),
        body.get("error").and_then(|e| e.get("message")),
        body.get("error"),
        body.get("detail"),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Like [`extract_error_message`] but starting from raw text.
#[must_use]
pub fn extract_error_message_text(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(extract_error_message)
}

// =============================================================================
// DIRECTORY WIRE TYPES
// =============================================================================

/// A user record as returned by `GET /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Convert directory users into candidates, dropping disabled users and
/// capping the result at `limit`.
#[must_use]
pub fn candidates_from_users(users: Vec<DirectoryUser>, limit: usize) -> Vec<Candidate> {
    users
        .into_iter()
        .filter(|u| u.enabled != Some(false))
        .take(limit)
        .map(|u| {
            let email = u.email.map(|e| e.trim().to_owned()).filter(|e| !e.is_empty());
            Candidate::directory(u.id, u.name, email)
        })
        .collect()
}

/// Query string for the directory endpoint.
#[must_use]
pub fn directory_query(limit: usize) -> String {
    format!("users?enabled=true&limit={limit}")
}

// =============================================================================
// RESPONSE HANDLING
// =============================================================================

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Interpret a directory response from any transport.
///
/// # Errors
///
/// Returns [`LookupError::Status`] for non-2xx responses and
/// [`LookupError::Decode`] when the body is not a user array.
pub fn parse_directory_response(status: u16, body: &str, limit: usize) -> Result<Vec<Candidate>, LookupError> {
    if !is_success(status) {
        return Err(LookupError::Status(status));
    }
    let users: Vec<DirectoryUser> = serde_json::from_str(body).map_err(|e| LookupError::Decode(e.to_string()))?;
    Ok(candidates_from_users(users, limit))
}

/// Interpret a booking response from any transport.
///
/// An empty 2xx body is reported as `null`.
///
/// # Errors
///
/// Returns [`SubmissionError::Rejected`] for non-2xx responses and
/// [`SubmissionError::Decode`] when a 2xx body is not JSON.
pub fn parse_booking_response(status: u16, body: &str) -> Result<Value, SubmissionError> {
    if !is_success(status) {
        return Err(SubmissionError::rejected(status, body));
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| SubmissionError::Decode(e.to_string()))
}

// =============================================================================
// TRAITS
// =============================================================================

/// Source of chairperson/participant candidates.
#[async_trait::async_trait(?Send)]
pub trait DirectoryLookup {
    /// Fetch at most `limit` enabled users.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the directory cannot be reached or
    /// answers with something unreadable.
    async fn list_candidates(&self, limit: usize) -> Result<Vec<Candidate>, LookupError>;
}

/// The scheduling endpoint that accepts finalized bookings.
#[async_trait::async_trait(?Send)]
pub trait BookingService {
    /// Submit one booking. The success value is forwarded to the host verbatim.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmissionError`] when the booking is refused or the
    /// request fails.
    async fn book(&self, payload: &BookingPayload) -> Result<Value, SubmissionError>;
}
