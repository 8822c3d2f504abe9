//! Client error types.

use contentful_model::DecodeError;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while talking to the management API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A response body did not decode into the expected resource.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A local check failed before any request was built.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Transport failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API request failed ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The server answered successfully but not in the shape the protocol requires.
    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status carried by this error, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns true if the server rejected a write because the
    /// `X-Contentful-Version` header was stale (HTTP 409).
    pub fn is_version_conflict(&self) -> bool {
        self.status() == Some(StatusCode::CONFLICT)
    }

    /// Returns true for a local not-found or a 404 response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_)) || self.status() == Some(StatusCode::NOT_FOUND)
    }
}
