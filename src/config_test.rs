use super::*;
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`lock_env`] to avoid env races.
unsafe fn clear_booking_env() {
    unsafe {
        std::env::remove_var("BOOKING_API_BASE_URL");
        std::env::remove_var("BOOKING_DIRECTORY_LIMIT");
        std::env::remove_var("BOOKING_MIN_CHAIRPERSON_NAME_LEN");
        std::env::remove_var("BOOKING_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("BOOKING_CONNECT_TIMEOUT_SECS");
        std::env::remove_var("BOOKING_TOAST_DISMISS_MS");
    }
}

#[test]
fn from_env_defaults_match_default_impl() {
    let _guard = lock_env();
    unsafe { clear_booking_env() };

    let cfg = FormConfig::from_env().unwrap();
    assert_eq!(cfg, FormConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.directory_limit, 100);
    assert_eq!(cfg.min_chairperson_name_len, 2);

    unsafe { clear_booking_env() };
}

#[test]
fn from_env_parses_overrides() {
    let _guard = lock_env();
    unsafe {
        clear_booking_env();
        std::env::set_var("BOOKING_API_BASE_URL", "https://booking.example.test/v2/");
        std::env::set_var("BOOKING_DIRECTORY_LIMIT", "25");
        std::env::set_var("BOOKING_MIN_CHAIRPERSON_NAME_LEN", "1");
        std::env::set_var("BOOKING_REQUEST_TIMEOUT_SECS", "42");
        std::env::set_var("BOOKING_CONNECT_TIMEOUT_SECS", "7");
        std::env::set_var("BOOKING_TOAST_DISMISS_MS", "1500");
    }

    let cfg = FormConfig::from_env().unwrap();
    assert_eq!(cfg.api_base_url, "https://booking.example.test/v2");
    assert_eq!(cfg.directory_limit, 25);
    assert_eq!(cfg.min_chairperson_name_len, 1);
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.toast_dismiss_ms, 1500);

    unsafe { clear_booking_env() };
}

#[test]
fn from_env_bad_number_errors() {
    let _guard = lock_env();
    unsafe {
        clear_booking_env();
        std::env::set_var("BOOKING_DIRECTORY_LIMIT", "lots");
    }

    let err = FormConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("BOOKING_DIRECTORY_LIMIT"));
    assert!(err.contains("lots"));

    unsafe { clear_booking_env() };
}

#[test]
fn join_url_uses_exactly_one_slash() {
    assert_eq!(join_url("https://x.test/api", "/bookings"), "https://x.test/api/bookings");
    assert_eq!(join_url("https://x.test/api/", "users"), "https://x.test/api/users");
}
