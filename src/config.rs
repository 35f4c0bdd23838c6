//! Booking form configuration parsed from environment variables.

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_DIRECTORY_LIMIT: usize = 100;
pub const DEFAULT_MIN_CHAIRPERSON_NAME_LEN: usize = 2;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TOAST_DISMISS_MS: u32 = 5000;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value for {var}: {value}")]
    Parse { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Base URL for the directory and booking endpoints, without a trailing `/`.
    pub api_base_url: String,
    /// Maximum number of directory users fetched on mount.
    pub directory_limit: usize,
    /// Minimum trimmed length of the chairperson name.
    pub min_chairperson_name_len: usize,
    pub timeouts: HttpTimeouts,
    /// Auto-dismiss delay for failure notifications.
    pub toast_dismiss_ms: u32,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            directory_limit: DEFAULT_DIRECTORY_LIMIT,
            min_chairperson_name_len: DEFAULT_MIN_CHAIRPERSON_NAME_LEN,
            timeouts: HttpTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            toast_dismiss_ms: DEFAULT_TOAST_DISMISS_MS,
        }
    }
}

impl FormConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BOOKING_API_BASE_URL`: default `/api`
    /// - `BOOKING_DIRECTORY_LIMIT`: default 100
    /// - `BOOKING_MIN_CHAIRPERSON_NAME_LEN`: default 2
    /// - `BOOKING_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BOOKING_CONNECT_TIMEOUT_SECS`: default 10
    /// - `BOOKING_TOAST_DISMISS_MS`: default 5000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when a numeric variable is set but not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = std::env::var("BOOKING_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let directory_limit = env_parse("BOOKING_DIRECTORY_LIMIT", DEFAULT_DIRECTORY_LIMIT)?;
        let min_chairperson_name_len = env_parse("BOOKING_MIN_CHAIRPERSON_NAME_LEN", DEFAULT_MIN_CHAIRPERSON_NAME_LEN)?;
        let timeouts = HttpTimeouts {
            request_secs: env_parse("BOOKING_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse("BOOKING_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };
        let toast_dismiss_ms = env_parse("BOOKING_TOAST_DISMISS_MS", DEFAULT_TOAST_DISMISS_MS)?;

        Ok(Self { api_base_url, directory_limit, min_chairperson_name_len, timeouts, toast_dismiss_ms })
    }

}

/// Join `path` onto `base` with exactly one `/` between them.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn env_parse<T: std::str::FromStr>(var: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Parse { var, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
