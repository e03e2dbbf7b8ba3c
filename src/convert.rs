//! Boundary constructors turning a finished `reqwest` exchange into a
//! dispatchable [`ResponseError`].
//!
//! The crate performs no requests of its own; these adapters only capture
//! what the transport layer already produced.

use crate::error::{ErrorData, ErrorResponse, ResponseError};

impl ResponseError {
    /// Captures a non-success `reqwest` response as a dispatchable error.
    ///
    /// Consumes the response body and, when it parses as a JSON object,
    /// keeps it as `data` so handlers can surface a server-provided
    /// `message`. Any other body yields `data: None`.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let url = response.url().to_string();
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        let data = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorData>(&body).ok(),
            Err(err) => {
                tracing::warn!("failed to read error response body: {}", err);
                None
            }
        };
        Self {
            response: Some(ErrorResponse {
                status: status.as_u16(),
                status_text,
                url,
            }),
            data,
        }
    }

    /// Captures a request that never produced a response.
    pub fn from_transport(error: &reqwest::Error) -> Self {
        tracing::error!("request failed without a response: {}", error);
        Self::transport()
    }
}
