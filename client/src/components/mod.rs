//! Booking form component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `meeting_schedule_form` is the only component the wizard shell mounts; the
//! rest are pieces it composes and drives through callbacks.

pub mod candidate_dropdown;
pub mod meeting_schedule_form;
pub mod participant_chips;
pub mod toast;
