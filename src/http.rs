//! `reqwest` transport for the directory and booking endpoints.
//!
//! Used by native hosts; the browser build ships its own `gloo-net`
//! transport. Response interpretation is shared via
//! [`crate::service::parse_directory_response`] and
//! [`crate::service::parse_booking_response`].

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::candidate::Candidate;
use crate::config::{FormConfig, join_url};
use crate::payload::BookingPayload;
use crate::service::{
    self, BookingService, DirectoryLookup, LookupError, SubmissionError, parse_booking_response,
    parse_directory_response,
};

/// Errors produced while constructing the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    Build(String),
}

/// HTTP client for the booking API.
pub struct BookingApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl BookingApiClient {
    /// Build a client with the configured base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`HttpClientError::Build`] if the HTTP client fails to build.
    pub fn new(config: &FormConfig) -> Result<Self, HttpClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| HttpClientError::Build(e.to_string()))?;
        Ok(Self { http, base_url: config.api_base_url.clone() })
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    #[must_use]
    pub fn directory_url(&self, limit: usize) -> String {
        self.url(&service::directory_query(limit))
    }

    #[must_use]
    pub fn bookings_url(&self) -> String {
        self.url("bookings")
    }
}

#[async_trait::async_trait(?Send)]
impl DirectoryLookup for BookingApiClient {
    async fn list_candidates(&self, limit: usize) -> Result<Vec<Candidate>, LookupError> {
        let url = self.directory_url(limit);
        debug!(%url, "fetching directory");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        parse_directory_response(status, &text, limit)
    }
}

#[async_trait::async_trait(?Send)]
impl BookingService for BookingApiClient {
    async fn book(&self, payload: &BookingPayload) -> Result<Value, SubmissionError> {
        let response = self
            .http
            .post(self.bookings_url())
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;
        debug!(status, "booking response received");
        parse_booking_response(status, &text)
    }
}
