//! Keyboard handling for the picker inputs.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// What a key press means inside a picker input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKey {
    /// Commit the typed value (`Enter`).
    Commit,
    /// Close the open dropdown (`Escape`).
    Dismiss,
    Other,
}

/// Classify a `KeyboardEvent::key` value.
pub fn classify(key: &str) -> FieldKey {
    match key {
        "Enter" => FieldKey::Commit,
        // "Esc" is what older Edge reports.
        "Escape" | "Esc" => FieldKey::Dismiss,
        _ => FieldKey::Other,
    }
}
