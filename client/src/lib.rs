//! # booking-client
//!
//! Leptos + WASM front end for the "Meeting Schedule" step of the booking
//! wizard. Renders `meeting_booking::MeetingBookingForm` and talks to the
//! booking API through `gloo-net`.
//!
//! This crate contains the form component and its pieces, the signal-backed
//! form state, and the browser transport. The wizard shell mounts
//! [`MeetingScheduleForm`] and supplies the selected slot plus the back and
//! success callbacks.

pub mod components;
pub mod net;
pub mod state;
pub mod util;

pub use components::meeting_schedule_form::MeetingScheduleForm;

/// Route panics and `log` output to the browser console.
///
/// The wizard shell calls this once before mounting.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
