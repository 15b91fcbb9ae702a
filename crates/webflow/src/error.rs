//! External service error types.

use serde_json::Value;
use thiserror::Error;

/// Errors returned by the external catalog.
///
/// The sync coordinator decides whether any of these is fatal; the client
/// only reports them.
#[derive(Debug, Error)]
pub enum WebflowError {
    /// The API answered with a non-success status.
    ///
    /// `body` passes the upstream diagnostic payload through: parsed JSON
    /// when possible, otherwise the raw text.
    #[error("Webflow API returned status {status}: {body}")]
    Api { status: u16, body: Value },

    /// The request never produced a response.
    #[error("Webflow request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response carried a body that is not JSON.
    #[error("Invalid Webflow response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured credentials cannot be sent as a header.
    #[error("Invalid Webflow header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl WebflowError {
    /// Returns the HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            WebflowError::Api { status, .. } => Some(*status),
            WebflowError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
