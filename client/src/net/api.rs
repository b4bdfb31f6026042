//! REST helpers for talking to the site server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submissions only happen
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is flattened into the user-facing message the form should
//! show. Transport detail never reaches the UI; it is logged to the console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ConsultationRequest, UNEXPECTED_ERROR_MESSAGE};
#[cfg(any(test, feature = "hydrate"))]
use super::types::{STORE_FALLBACK_MESSAGE, SubmitResponse};

#[cfg(feature = "hydrate")]
const CONSULTATIONS_ENDPOINT: &str = "/api/consultations";

/// Map a decoded (or undecodable) response body to the form outcome.
#[cfg(any(test, feature = "hydrate"))]
fn submit_outcome(body: Option<SubmitResponse>) -> Result<(), String> {
    match body {
        Some(SubmitResponse { ok: true, .. }) => Ok(()),
        Some(SubmitResponse { ok: false, error }) => Err(error
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| STORE_FALLBACK_MESSAGE.to_owned())),
        None => Err(UNEXPECTED_ERROR_MESSAGE.to_owned()),
    }
}

/// Submit one consultation request via `POST /api/consultations`.
///
/// Exactly one request is sent; there is no retry.
///
/// # Errors
///
/// Returns the message to display when the server reports a failure or the
/// request could not complete.
pub async fn submit_consultation(request: &ConsultationRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let sent = match gloo_net::http::Request::post(CONSULTATIONS_ENDPOINT).json(request) {
            Ok(req) => req.send().await,
            Err(e) => Err(e),
        };
        let resp = match sent {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("consultation submit failed: {e}");
                return submit_outcome(None);
            }
        };
        let status = resp.status();
        let body = resp.json::<SubmitResponse>().await;
        if let Err(e) = &body {
            log::warn!("consultation response unreadable (status {status}): {e}");
        }
        submit_outcome(body.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(UNEXPECTED_ERROR_MESSAGE.to_owned())
    }
}

/// Submission transport seen by the form state. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait ConsultationApi {
    /// Send one request.
    ///
    /// # Errors
    ///
    /// Returns the message the form should display.
    async fn submit(&self, request: &ConsultationRequest) -> Result<(), String>;
}

/// `ConsultationApi` backed by `POST /api/consultations`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpConsultationApi;

#[async_trait::async_trait(?Send)]
impl ConsultationApi for HttpConsultationApi {
    async fn submit(&self, request: &ConsultationRequest) -> Result<(), String> {
        submit_consultation(request).await
    }
}
