//! Directory-side error types.

use std::time::Duration;

use http::StatusCode;

/// Errors that can occur while listing the user directory.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// Network or connection failure talking to the identity provider.
    #[error("directory request failed: {0}")]
    Transport(String),

    /// Could not obtain a bearer token for the identity provider.
    #[error("failed to obtain directory access token: {0}")]
    Token(String),

    /// The identity provider answered with a non-success status.
    #[error("directory returned HTTP {0}")]
    Status(StatusCode),

    /// The response body is not a well-formed user listing.
    #[error("directory response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// The fetch did not finish within its deadline.
    #[error("directory request timed out after {0:?}")]
    Timeout(Duration),
}

impl DirectoryError {
    /// Whether a caller-side retry policy could reasonably try again.
    ///
    /// The gateway itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            DirectoryError::Transport(_) => true,
            DirectoryError::Token(_) => true,
            DirectoryError::Timeout(_) => true,
            DirectoryError::Status(status) => status.is_server_error(),
            DirectoryError::Decode(_) => false,
        }
    }
}
