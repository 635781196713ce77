//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ServerError`, since submission is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decoding failures collapse into `SubmitOutcome::ServerError`
//! so the form shows a generic notice instead of crashing hydration. Nothing
//! is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contact::NewContactMessage;
#[cfg(any(test, feature = "hydrate"))]
use contact::{CreatedResponse, ValidationErrorResponse};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Result of one contact submission as the form needs to see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success { id: i64 },
    /// Server-side rejection; field names in the order reported.
    ValidationError { fields: Vec<String> },
    ServerError,
}

/// Map an HTTP status and raw body from `POST /api/contact` to an outcome.
#[cfg(any(test, feature = "hydrate"))]
fn classify_response(status: u16, body: &str) -> SubmitOutcome {
    match status {
        200..=299 => serde_json::from_str::<CreatedResponse>(body)
            .map_or(SubmitOutcome::ServerError, |resp| SubmitOutcome::Success { id: resp.data.id }),
        400 => {
            let fields = serde_json::from_str::<ValidationErrorResponse>(body)
                .map(|resp| resp.errors.into_iter().map(|e| e.field).filter(|f| !f.is_empty()).collect())
                .unwrap_or_default();
            SubmitOutcome::ValidationError { fields }
        }
        _ => SubmitOutcome::ServerError,
    }
}

/// Submit a contact message via `POST /api/contact`.
pub async fn submit_contact(message: &NewContactMessage) -> SubmitOutcome {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::post(CONTACT_ENDPOINT).json(message) {
            Ok(request) => request,
            Err(e) => {
                leptos::logging::warn!("contact request build failed: {e}");
                return SubmitOutcome::ServerError;
            }
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("contact request failed: {e}");
                return SubmitOutcome::ServerError;
            }
        };
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        classify_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        SubmitOutcome::ServerError
    }
}
