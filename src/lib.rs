//! # meeting-booking
//!
//! Headless core of the "Meeting Schedule" step of the appointment-booking
//! wizard: chairperson autocomplete, participant list building, validation,
//! payload construction, and the single outbound booking call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing in this crate knows about a UI framework. The `client/` crate
//! renders [`form::MeetingBookingForm`] with Leptos and plugs browser
//! transports into the [`service`] traits; native hosts can use the
//! `reqwest` adapters in [`http`] instead.

pub mod candidate;
pub mod config;
pub mod form;
#[cfg(feature = "http")]
pub mod http;
pub mod participants;
pub mod payload;
pub mod service;
pub mod session;
pub mod submit;
pub mod validation;

pub use candidate::{Candidate, CandidateOrigin};
pub use config::FormConfig;
pub use form::{ChairpersonState, DirectoryStatus, DropdownKind, MeetingBookingForm, SubmitRejected};
pub use payload::{BookingContext, BookingPayload};
pub use service::{BookingService, DirectoryLookup, LookupError, SubmissionError};
pub use session::{DirectoryLoad, FormAccess, MountGuard, load_directory};
pub use submit::{SubmitOutcome, Submitter, Toast};
pub use validation::FieldErrors;
