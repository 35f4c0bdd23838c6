//! One submit click, end to end.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Submitter::submit` validates, marks the form in flight, calls the
//! booking service once, and settles the form again. Success goes to the
//! host's callback; failure becomes a [`Toast`] and the form keeps everything
//! the user typed so they can retry.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::form::{MeetingBookingForm, SubmitRejected};
use crate::payload::BookingContext;
use crate::service::{BookingService, SubmissionError};
use crate::session::FormAccess;

/// A transient, dismissible failure notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn from_error(err: &SubmissionError) -> Self {
        Self { message: err.display_message() }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The booking succeeded and the host callback ran.
    Booked,
    /// The booking service failed; show the toast.
    Failed(Toast),
    /// The service was not called.
    Rejected(SubmitRejected),
}

/// Drives submissions against a booking service.
pub struct Submitter<'a, S: ?Sized> {
    service: &'a S,
    config: &'a FormConfig,
}

impl<'a, S> Submitter<'a, S>
where
    S: BookingService + ?Sized,
{
    pub fn new(service: &'a S, config: &'a FormConfig) -> Self {
        Self { service, config }
    }

    /// Submit the form. `on_success` receives the service's response
    /// verbatim and runs at most once.
    pub async fn submit<F, C>(&self, form: &F, context: &BookingContext, on_success: C) -> SubmitOutcome
    where
        F: FormAccess + ?Sized,
        C: FnOnce(Value),
    {
        let payload = match form.with_form(|f| f.begin_submit(context, self.config)) {
            Some(Ok(payload)) => payload,
            Some(Err(rejected)) => return SubmitOutcome::Rejected(rejected),
            None => return SubmitOutcome::Rejected(SubmitRejected::Unmounted),
        };

        info!(
            date = %payload.date,
            start = %payload.start_time,
            participants = payload.participants.split(crate::participants::WIRE_SEPARATOR).filter(|s| !s.is_empty()).count(),
            "submitting booking"
        );
        let result = self.service.book(&payload).await;
        if form.with_form(MeetingBookingForm::finish_submit).is_none() {
            debug!("form unmounted while booking was in flight");
        }

        match result {
            Ok(value) => {
                info!("booking confirmed");
                on_success(value);
                SubmitOutcome::Booked
            }
            Err(e) => {
                warn!(error = %e, "booking failed");
                SubmitOutcome::Failed(Toast::from_error(&e))
            }
        }
    }
}
