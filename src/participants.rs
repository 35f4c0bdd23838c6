//! Ordered, duplicate-free list of participant emails.

#[cfg(test)]
#[path = "participants_test.rs"]
mod participants_test;

use serde::{Deserialize, Serialize};

/// Separator used when the list is sent over the wire.
pub const WIRE_SEPARATOR: &str = ", ";

/// Participant emails in insertion order.
///
/// Entries always contain `@` and never repeat. Comparison is exact, so
/// `Bob@co.com` and `bob@co.com` are distinct entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantList {
    emails: Vec<String>,
}

impl ParticipantList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trimmed email unless it is blank, lacks `@`, or is already present.
    ///
    /// Returns `true` when the list grew.
    pub fn add(&mut self, raw: &str) -> bool {
        let email = raw.trim();
        if email.is_empty() || !email.contains('@') || self.contains(email) {
            return false;
        }
        self.emails.push(email.to_owned());
        true
    }

    /// Remove an exact match. Returns `true` when an entry was removed.
    pub fn remove(&mut self, email: &str) -> bool {
        let before = self.emails.len();
        self.emails.retain(|e| e != email);
        self.emails.len() != before
    }

    #[must_use]
    pub fn contains(&self, email: &str) -> bool {
        self.emails.iter().any(|e| e == email)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.emails.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.emails.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.emails
    }

    /// Join entries with [`WIRE_SEPARATOR`]; empty list yields an empty string.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.emails.join(WIRE_SEPARATOR)
    }
}
