//! Reactive state owned by the booking form component.
//!
//! DESIGN
//! ======
//! Domain state lives in `meeting_booking::MeetingBookingForm`; this layer only
//! wraps it in signals and adds the transient toast notification.

pub mod form;
pub mod toast;
