//! Failure notification shown after a rejected booking.
//!
//! DESIGN
//! ======
//! Each `show` bumps a sequence number. The auto-dismiss timer remembers the
//! number it was started for and only clears that toast, so a newer failure
//! is never hidden early by an older timer.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use meeting_booking::Toast;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
    seq: u64,
}

impl ToastState {
    /// Replace any visible toast. Returns the sequence number for expiry.
    pub fn show(&mut self, toast: Toast) -> u64 {
        self.seq += 1;
        self.current = Some(toast);
        self.seq
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Dismiss only if `seq` is still the visible toast.
    pub fn expire(&mut self, seq: u64) -> bool {
        if self.seq != seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<String> {
        self.current.as_ref().map(|t| t.message.clone())
    }
}
