//! The failed-request error value consumed by the dispatcher.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failed request as observed by the dispatcher.
///
/// `response` is present when the server replied; its absence signals a
/// transport-level failure (no reply received at all). `data` carries the
/// parsed JSON error body, when one exists.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", summary(.response))]
pub struct ResponseError {
    pub response: Option<ErrorResponse>,
    pub data: Option<ErrorData>,
}

/// The server's reply to a failed request.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub status: u16,
    /// Reason phrase as reported by the server. May be empty.
    pub status_text: String,
    pub url: String,
}

/// A parsed JSON error body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorData {
    pub message: Option<String>,
    /// Remaining fields of the body, kept for override handlers.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Broad classification of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 401: the caller is not authenticated.
    Authentication,
    /// 403: authenticated, but access is forbidden.
    Authorization,
    /// The server replied with any other status.
    Http(u16),
    /// No response was received.
    Transport,
}

impl ResponseError {
    /// An error for a request the server answered with `status`.
    pub fn from_status(
        status: u16,
        status_text: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            response: Some(ErrorResponse {
                status,
                status_text: status_text.into(),
                url: url.into(),
            }),
            data: None,
        }
    }

    /// An error for a request that never received a reply.
    pub fn transport() -> Self {
        Self {
            response: None,
            data: None,
        }
    }

    /// Attaches a parsed error body.
    pub fn with_data(mut self, data: ErrorData) -> Self {
        self.data = Some(data);
        self
    }

    /// Classifies this failure.
    pub fn kind(&self) -> FailureKind {
        match &self.response {
            Some(response) => match response.status {
                401 => FailureKind::Authentication,
                403 => FailureKind::Authorization,
                status => FailureKind::Http(status),
            },
            None => FailureKind::Transport,
        }
    }
}

fn summary(response: &Option<ErrorResponse>) -> String {
    match response {
        Some(r) => format!("request to {} failed with status {}", r.url, r.status),
        None => "request failed without a response".to_string(),
    }
}
