//! Signal-backed handle to the booking form.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use leptos::prelude::*;
use meeting_booking::{FormAccess, MeetingBookingForm};

/// The live form, shared by the component tree and its async tasks.
#[derive(Clone, Copy, Debug)]
pub struct FormSignal(RwSignal<MeetingBookingForm>);

impl FormSignal {
    pub fn new() -> Self {
        Self(RwSignal::new(MeetingBookingForm::new()))
    }

    pub fn signal(self) -> RwSignal<MeetingBookingForm> {
        self.0
    }

    /// Tracked read for view closures.
    pub fn read<R>(self, f: impl FnOnce(&MeetingBookingForm) -> R) -> R {
        self.0.with(f)
    }

    /// Apply a form operation from an event handler.
    pub fn apply(self, f: impl FnOnce(&mut MeetingBookingForm)) {
        self.0.update(f);
    }
}

impl Default for FormSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl FormAccess for FormSignal {
    fn with_form<R>(&self, f: impl FnOnce(&mut MeetingBookingForm) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
