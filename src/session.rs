//! Form session plumbing shared by every host: access to the live form and
//! the mount-scoped directory fetch.
//!
//! SYSTEM CONTEXT
//! ==============
//! The UI owns the form (a Leptos signal in the browser, a `RefCell` natively)
//! and hands it to async flows through [`FormAccess`]. Flows never hold the
//! form across an `.await`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::FormConfig;
use crate::form::MeetingBookingForm;
use crate::service::DirectoryLookup;

/// Short-lived mutable access to a mounted form.
pub trait FormAccess {
    /// Run `f` against the form. `None` means the form no longer exists
    /// (its owner was torn down) and `f` did not run.
    fn with_form<R>(&self, f: impl FnOnce(&mut MeetingBookingForm) -> R) -> Option<R>;
}

impl FormAccess for RefCell<MeetingBookingForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut MeetingBookingForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Tracks whether the owning form is still mounted.
///
/// Clones share the flag. The host calls [`MountGuard::unmount`] from its
/// cleanup hook; async work checks [`MountGuard::is_mounted`] before writing
/// results back.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl Default for MountGuard {
    fn default() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }
}

impl MountGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// What happened to a directory fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectoryLoad {
    /// Candidates were installed on the form.
    Loaded(usize),
    /// The lookup failed; the form was marked unavailable.
    Unavailable,
    /// The form unmounted before the response arrived; nothing was applied.
    Discarded,
}

/// Fetch directory candidates once and install them on the form.
pub async fn load_directory<F, D>(form: &F, lookup: &D, config: &FormConfig, guard: &MountGuard) -> DirectoryLoad
where
    F: FormAccess + ?Sized,
    D: DirectoryLookup + ?Sized,
{
    let result = lookup.list_candidates(config.directory_limit).await;
    if !guard.is_mounted() {
        debug!("directory response arrived after unmount; discarding");
        return DirectoryLoad::Discarded;
    }
    let applied = match result {
        Ok(mut candidates) => {
            candidates.truncate(config.directory_limit);
            let count = candidates.len();
            form.with_form(|f| f.load_directory(candidates))
                .map(|()| DirectoryLoad::Loaded(count))
        }
        Err(e) => {
            warn!(error = %e, "directory lookup failed; pickers limited to local entries");
            form.with_form(MeetingBookingForm::mark_directory_unavailable)
                .map(|()| DirectoryLoad::Unavailable)
        }
    };
    let load = applied.unwrap_or(DirectoryLoad::Discarded);
    debug!(?load, "directory fetch settled");
    load
}
