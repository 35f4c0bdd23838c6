//! Display strings for picker rows and form chrome.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

use meeting_booking::{Candidate, DirectoryStatus};

/// Row label for a suggestion: `Name <email>`, or just the name.
pub fn candidate_label(candidate: &Candidate) -> String {
    match candidate.email.as_deref() {
        Some(email) if !email.eq_ignore_ascii_case(&candidate.display_name) => {
            format!("{} <{email}>", candidate.display_name)
        }
        _ => candidate.display_name.clone(),
    }
}

/// Placeholder row shown when a picker has no suggestions.
pub fn empty_suggestions_text(status: DirectoryStatus) -> &'static str {
    match status {
        DirectoryStatus::Loading => "Loading users...",
        DirectoryStatus::Ready => "No matching users",
        DirectoryStatus::Unavailable => "User directory unavailable",
    }
}

/// Label for the submit button.
pub fn submit_label(submitting: bool) -> &'static str {
    if submitting { "Booking..." } else { "Book Meeting" }
}
