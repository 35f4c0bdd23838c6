//! Directory candidates usable as chairperson or participant.
//!
//! DESIGN
//! ======
//! Candidates are immutable records. The known list only grows: directory
//! results arrive once on mount, and local candidates are synthesized from
//! free text when the chairperson field is left without a match.

#[cfg(test)]
#[path = "candidate_test.rs"]
mod candidate_test;

use serde::{Deserialize, Serialize};

/// Prefix for identifiers of locally synthesized candidates.
pub const LOCAL_ID_PREFIX: &str = "local-";

/// Where a candidate record came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateOrigin {
    /// Returned by the directory lookup.
    #[default]
    Directory,
    /// Synthesized from text typed into the chairperson field.
    Local,
}

/// A user record offered in the chairperson and participant pickers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub display_name: String,
    pub email: Option<String>,
    #[serde(default)]
    pub origin: CandidateOrigin,
}

impl Candidate {
    /// Build a directory-sourced candidate.
    #[must_use]
    pub fn directory(id: impl Into<String>, display_name: impl Into<String>, email: Option<String>) -> Self {
        Self { id: id.into(), display_name: display_name.into(), email, origin: CandidateOrigin::Directory }
    }

    /// Synthesize a local candidate from free text.
    ///
    /// Text containing `@` is treated as an email address and doubles as the
    /// display name.
    #[must_use]
    pub fn local(text: &str) -> Self {
        let text = text.trim();
        let email = text.contains('@').then(|| text.to_owned());
        Self {
            id: format!("{LOCAL_ID_PREFIX}{}", uuid::Uuid::new_v4()),
            display_name: text.to_owned(),
            email,
            origin: CandidateOrigin::Local,
        }
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        self.origin == CandidateOrigin::Local
    }
}

/// Case-insensitive substring match on an optional field.
fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

/// Candidates whose display name contains `query`, case-insensitively.
///
/// An empty query returns every candidate.
#[must_use]
pub fn filter_by_name<'a>(candidates: &'a [Candidate], query: &str) -> Vec<&'a Candidate> {
    let needle = query.trim().to_lowercase();
    candidates
        .iter()
        .filter(|c| contains_ci(&c.display_name, &needle))
        .collect()
}

/// Candidates with an email containing `query`, case-insensitively.
///
/// Candidates without an email are never offered as participants.
#[must_use]
pub fn filter_by_email<'a>(candidates: &'a [Candidate], query: &str) -> Vec<&'a Candidate> {
    let needle = query.trim().to_lowercase();
    candidates
        .iter()
        .filter(|c| c.email.as_deref().is_some_and(|e| contains_ci(e, &needle)))
        .collect()
}

/// Exact match after trimming, with the same case folding as the filters.
fn eq_ci(a: &str, b_lower: &str) -> bool {
    a.trim().to_lowercase() == b_lower
}

/// Find a candidate by exact display name, ignoring case and surrounding whitespace.
#[must_use]
pub fn find_by_name<'a>(candidates: &'a [Candidate], name: &str) -> Option<&'a Candidate> {
    let name = name.trim().to_lowercase();
    candidates.iter().find(|c| eq_ci(&c.display_name, &name))
}

/// Find a candidate by email, ignoring case and surrounding whitespace.
#[must_use]
pub fn find_by_email<'a>(candidates: &'a [Candidate], email: &str) -> Option<&'a Candidate> {
    let email = email.trim().to_lowercase();
    candidates
        .iter()
        .find(|c| c.email.as_deref().is_some_and(|e| eq_ci(e, &email)))
}

/// Append `candidate` unless one with the same id or email is already known.
///
/// Returns `true` when the list grew.
pub fn merge(candidates: &mut Vec<Candidate>, candidate: Candidate) -> bool {
    let duplicate = candidates.iter().any(|c| {
        c.id == candidate.id
            || (c.email.is_some() && c.email.as_deref().map(str::to_lowercase)
                == candidate.email.as_deref().map(str::to_lowercase))
    });
    if duplicate {
        return false;
    }
    candidates.push(candidate);
    true
}
