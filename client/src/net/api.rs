//! Browser transport for the directory and booking endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` deadline taken from [`FormConfig::timeouts`].
//! Server-side (SSR): stubs returning transport errors, since the form only
//! talks to the API after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Network and timeout failures map onto the core crate's `LookupError` and
//! `SubmissionError`; status and body interpretation is shared with the native
//! transport through `meeting_booking::service::parse_*_response`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use meeting_booking::config::join_url;
use meeting_booking::service::{self, BookingService, DirectoryLookup, LookupError, SubmissionError};
use meeting_booking::{BookingPayload, Candidate, FormConfig};
use serde_json::Value;

#[cfg(not(feature = "hydrate"))]
const SERVER_STUB_MESSAGE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
fn timed_out_message(secs: u64) -> String {
    format!("request timed out after {secs}s")
}

/// `gloo-net` client for the booking API.
#[derive(Clone, Debug)]
pub struct BrowserBookingApi {
    base_url: String,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    request_secs: u64,
}

impl BrowserBookingApi {
    pub fn new(config: &FormConfig) -> Self {
        Self { base_url: config.api_base_url.clone(), request_secs: config.timeouts.request_secs }
    }

    pub fn directory_url(&self, limit: usize) -> String {
        join_url(&self.base_url, &service::directory_query(limit))
    }

    pub fn bookings_url(&self) -> String {
        join_url(&self.base_url, "bookings")
    }
}

/// Resolve `fut`, or `None` once `secs` have elapsed.
#[cfg(feature = "hydrate")]
async fn within<T>(secs: u64, fut: impl std::future::Future<Output = T>) -> Option<T> {
    use futures::future::{Either, select};

    let fut = std::pin::pin!(fut);
    let deadline = std::pin::pin!(gloo_timers::future::sleep(std::time::Duration::from_secs(secs)));
    match select(fut, deadline).await {
        Either::Left((value, _)) => Some(value),
        Either::Right(_) => None,
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_text(request: gloo_net::http::Request, secs: u64) -> Result<(u16, String), String> {
    let exchange = async {
        let resp = request.send().await.map_err(|e| e.to_string())?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| e.to_string())?;
        Ok((status, text))
    };
    within(secs, exchange).await.unwrap_or_else(|| Err(timed_out_message(secs)))
}

#[async_trait(?Send)]
impl DirectoryLookup for BrowserBookingApi {
    async fn list_candidates(&self, limit: usize) -> Result<Vec<Candidate>, LookupError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(&self.directory_url(limit))
                .build()
                .map_err(|e| LookupError::Transport(e.to_string()))?;
            let (status, text) = fetch_text(request, self.request_secs)
                .await
                .map_err(LookupError::Transport)?;
            service::parse_directory_response(status, &text, limit)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = limit;
            Err(LookupError::Transport(SERVER_STUB_MESSAGE.to_owned()))
        }
    }
}

#[async_trait(?Send)]
impl BookingService for BrowserBookingApi {
    async fn book(&self, payload: &BookingPayload) -> Result<Value, SubmissionError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::post(&self.bookings_url())
                .json(payload)
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;
            let (status, text) = fetch_text(request, self.request_secs)
                .await
                .map_err(SubmissionError::Transport)?;
            log::debug!("booking response status {status}");
            service::parse_booking_response(status, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(SubmissionError::Transport(SERVER_STUB_MESSAGE.to_owned()))
        }
    }
}
