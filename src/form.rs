//! Meeting booking form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `MeetingBookingForm` lives per mounted form. The UI layer forwards
//! keystrokes, clicks, and blur events into the operations below and renders
//! from the getters; nothing else mutates the state.
//!
//! DESIGN
//! ======
//! Fields are private so the chairperson name/id pair can only change
//! together. Editing the name always drops the id; the id comes back only
//! through [`MeetingBookingForm::resolve_chairperson`] or a blur.
//!
//! Leaving the chairperson field without picking a suggestion resolves the
//! typed text: an exact (case-insensitive) name or email match wins, otherwise
//! a local candidate is synthesized so the user is never blocked on the
//! directory.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use tracing::debug;

use crate::candidate::{self, Candidate, CandidateOrigin};
use crate::config::FormConfig;
use crate::participants::ParticipantList;
use crate::payload::{BookingContext, BookingFields, BookingPayload};
use crate::validation::{self, FieldErrors};

/// Which picker a dropdown belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownKind {
    Chairperson,
    Participant,
}

/// Lifecycle of the chairperson field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChairpersonState {
    /// Nothing entered yet, or the field was cleared and left.
    #[default]
    Unset,
    /// The user is typing; no candidate is attached.
    Editing,
    /// A candidate is attached and its name is shown.
    Resolved,
}

/// Load status of the directory used by both pickers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectoryStatus {
    #[default]
    Loading,
    Ready,
    /// The lookup failed; pickers show local candidates only.
    Unavailable,
}

/// Why a submit was not started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    /// A booking call from this form is still outstanding.
    #[error("a booking request is already in flight")]
    InFlight,
    /// One or more fields failed validation.
    #[error("form has invalid fields")]
    Invalid(FieldErrors),
    /// The form was torn down before the submit could start.
    #[error("form is no longer mounted")]
    Unmounted,
}

/// State of one meeting booking form.
#[derive(Clone, Debug, Default)]
pub struct MeetingBookingForm {
    chairperson_name: String,
    chairperson_id: Option<String>,
    chairperson_state: ChairpersonState,
    host_email: String,
    participants: ParticipantList,
    participant_input: String,
    candidates: Vec<Candidate>,
    directory_status: DirectoryStatus,
    open_dropdown: Option<DropdownKind>,
    field_errors: FieldErrors,
    submitting: bool,
}

impl MeetingBookingForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[must_use]
    pub fn chairperson_name(&self) -> &str {
        &self.chairperson_name
    }

    #[must_use]
    pub fn chairperson_id(&self) -> Option<&str> {
        self.chairperson_id.as_deref()
    }

    #[must_use]
    pub fn chairperson_state(&self) -> ChairpersonState {
        self.chairperson_state
    }

    #[must_use]
    pub fn host_email(&self) -> &str {
        &self.host_email
    }

    #[must_use]
    pub fn participants(&self) -> &ParticipantList {
        &self.participants
    }

    #[must_use]
    pub fn participant_input(&self) -> &str {
        &self.participant_input
    }

    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[must_use]
    pub fn directory_status(&self) -> DirectoryStatus {
        self.directory_status
    }

    #[must_use]
    pub fn open_dropdown(&self) -> Option<DropdownKind> {
        self.open_dropdown
    }

    #[must_use]
    pub fn is_open(&self, kind: DropdownKind) -> bool {
        self.open_dropdown == Some(kind)
    }

    #[must_use]
    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // =========================================================================
    // DIRECTORY
    // =========================================================================

    /// Install directory results, keeping any local candidates already created.
    ///
    /// A local chairperson whose email turns out to be in the directory is
    /// re-resolved to the directory entry.
    pub fn load_directory(&mut self, candidates: Vec<Candidate>) {
        let locals: Vec<Candidate> = self.candidates.drain(..).filter(Candidate::is_local).collect();
        self.candidates = candidates;
        let mut superseded_chair = None;
        for local in locals {
            let is_chair = self.chairperson_id.as_deref() == Some(local.id.as_str());
            let email = local.email.clone();
            if !candidate::merge(&mut self.candidates, local) && is_chair {
                superseded_chair = email;
            }
        }
        self.directory_status = DirectoryStatus::Ready;

        if let Some(email) = superseded_chair {
            match candidate::find_by_email(&self.candidates, &email).cloned() {
                Some(known) => {
                    debug!(id = %known.id, "local chairperson found in directory");
                    self.resolve_chairperson(&known);
                }
                None => self.chairperson_id = None,
            }
        }
    }

    /// Record a failed lookup; pickers keep working with local candidates.
    pub fn mark_directory_unavailable(&mut self) {
        self.directory_status = DirectoryStatus::Unavailable;
    }

    // =========================================================================
    // CHAIRPERSON
    // =========================================================================

    /// Apply a keystroke in the chairperson field.
    pub fn edit_chairperson(&mut self, text: &str) {
        text.clone_into(&mut self.chairperson_name);
        self.chairperson_id = None;
        self.chairperson_state = ChairpersonState::Editing;
        self.field_errors.chairperson_name = None;
        self.open_dropdown = Some(DropdownKind::Chairperson);
    }

    /// Attach a candidate as chairperson and close the chairperson dropdown.
    ///
    /// A blank host email is prefilled with the candidate's email.
    pub fn resolve_chairperson(&mut self, candidate: &Candidate) {
        candidate::merge(&mut self.candidates, candidate.clone());
        self.chairperson_name.clone_from(&candidate.display_name);
        self.chairperson_id = Some(candidate.id.clone());
        self.chairperson_state = ChairpersonState::Resolved;
        self.field_errors.chairperson_name = None;
        if self.host_email.trim().is_empty() {
            if let Some(email) = &candidate.email {
                self.host_email.clone_from(email);
                self.field_errors.host_email = None;
            }
        }
        if self.is_open(DropdownKind::Chairperson) {
            self.open_dropdown = None;
        }
    }

    /// The chairperson field lost focus without a suggestion being picked.
    pub fn blur_chairperson(&mut self) {
        if self.is_open(DropdownKind::Chairperson) {
            self.open_dropdown = None;
        }
        if self.chairperson_state != ChairpersonState::Editing {
            return;
        }
        let typed = self.chairperson_name.trim().to_owned();
        if typed.is_empty() {
            self.chairperson_name.clear();
            self.chairperson_state = ChairpersonState::Unset;
            return;
        }
        let known = candidate::find_by_name(&self.candidates, &typed)
            .or_else(|| candidate::find_by_email(&self.candidates, &typed));
        let resolved = match known {
            Some(found) => found.clone(),
            None => {
                let local = Candidate::local(&typed);
                debug!(id = %local.id, "chairperson not in directory; using local candidate");
                local
            }
        };
        self.resolve_chairperson(&resolved);
    }

    /// Chairperson suggestions filtered by the typed name.
    #[must_use]
    pub fn chairperson_suggestions(&self) -> Vec<&Candidate> {
        let query = match self.chairperson_state {
            ChairpersonState::Resolved => "",
            _ => self.chairperson_name.as_str(),
        };
        candidate::filter_by_name(&self.candidates, query)
    }

    // =========================================================================
    // HOST
    // =========================================================================

    pub fn set_host_email(&mut self, text: &str) {
        text.clone_into(&mut self.host_email);
        self.field_errors.host_email = None;
    }

    // =========================================================================
    // PARTICIPANTS
    // =========================================================================

    /// Apply a keystroke in the participant field.
    pub fn set_participant_input(&mut self, text: &str) {
        text.clone_into(&mut self.participant_input);
        self.open_dropdown = Some(DropdownKind::Participant);
    }

    /// Append a participant email; blank, `@`-less, and duplicate input is ignored.
    ///
    /// Returns `true` when the list grew. The input buffer is cleared only then.
    pub fn add_participant(&mut self, raw: &str) -> bool {
        if !self.participants.add(raw) {
            return false;
        }
        self.participant_input.clear();
        self.field_errors.participants = None;
        true
    }

    /// Add whatever is in the participant input buffer.
    pub fn commit_participant_input(&mut self) -> bool {
        let raw = self.participant_input.clone();
        self.add_participant(&raw)
    }

    /// Add a picked candidate's email and remember the candidate for later
    /// chairperson lookups.
    pub fn add_participant_candidate(&mut self, candidate: &Candidate) -> bool {
        let added = candidate
            .email
            .as_deref()
            .is_some_and(|email| self.add_participant(email));
        if added {
            candidate::merge(&mut self.candidates, candidate.clone());
        }
        if self.is_open(DropdownKind::Participant) {
            self.open_dropdown = None;
        }
        added
    }

    /// Remove a participant by exact match; absent entries are ignored.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        self.participants.remove(email)
    }

    /// Participant suggestions filtered by the input buffer, excluding emails
    /// already in the list.
    #[must_use]
    pub fn participant_suggestions(&self) -> Vec<&Candidate> {
        candidate::filter_by_email(&self.candidates, &self.participant_input)
            .into_iter()
            .filter(|c| c.email.as_deref().is_some_and(|e| !self.participants.contains(e)))
            .collect()
    }

    // =========================================================================
    // DROPDOWNS
    // =========================================================================

    /// Open one picker; the other one closes.
    pub fn show_dropdown(&mut self, kind: DropdownKind) {
        self.open_dropdown = Some(kind);
    }

    /// Close whichever picker is open (outside click, `Escape`).
    pub fn close_dropdown(&mut self) {
        self.open_dropdown = None;
    }

    // =========================================================================
    // SUBMISSION
    // =========================================================================

    /// Check every field against its rule.
    ///
    /// # Errors
    ///
    /// Returns the collected [`FieldErrors`] when any field is invalid.
    pub fn validate(&self, config: &FormConfig) -> Result<(), FieldErrors> {
        let errors = FieldErrors {
            chairperson_name: validation::validate_chairperson_name(
                &self.chairperson_name,
                config.min_chairperson_name_len,
            ),
            host_email: validation::validate_email(&self.host_email, "Host email"),
            participants: validation::validate_participants(self.participants.iter()),
        };
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Directory id of the chairperson, if one is attached.
    ///
    /// Local candidates are not known to the backend and yield `None`.
    #[must_use]
    pub fn wire_chairperson_id(&self) -> Option<&str> {
        let id = self.chairperson_id.as_deref()?;
        self.candidates
            .iter()
            .find(|c| c.id == id)
            .filter(|c| c.origin == CandidateOrigin::Directory)
            .map(|c| c.id.as_str())
    }

    /// Build the wire payload from the current state.
    #[must_use]
    pub fn build_payload(&self, context: &BookingContext) -> BookingPayload {
        let participants = self.participants.to_wire();
        BookingPayload::build(
            context,
            BookingFields {
                chairperson_name: &self.chairperson_name,
                chairperson_id: self.wire_chairperson_id(),
                host_email: &self.host_email,
                participants: &participants,
            },
        )
    }

    /// Validate and mark a booking call as outstanding.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitRejected::InFlight`] while a previous call is
    /// outstanding, or [`SubmitRejected::Invalid`] (also stored for inline
    /// display) when validation fails.
    pub fn begin_submit(
        &mut self,
        context: &BookingContext,
        config: &FormConfig,
    ) -> Result<BookingPayload, SubmitRejected> {
        if self.submitting {
            debug!("submit ignored; booking already in flight");
            return Err(SubmitRejected::InFlight);
        }
        if let Err(errors) = self.validate(config) {
            debug!(?errors, "submit blocked by validation");
            self.field_errors = errors.clone();
            return Err(SubmitRejected::Invalid(errors));
        }
        self.field_errors = FieldErrors::default();
        self.open_dropdown = None;
        self.submitting = true;
        Ok(self.build_payload(context))
    }

    /// Mark the outstanding booking call as settled, whatever its outcome.
    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
