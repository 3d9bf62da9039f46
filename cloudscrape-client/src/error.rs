//! Error types for the CloudScrape client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the CloudScrape client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The facade was used before being initialized with credentials
    #[error("client is not initialized: call init first")]
    Uninitialized,

    /// The HTTP round trip failed (connection, DNS, timeout)
    ///
    /// Surfaced unmodified, never retried. A delivered response is not a
    /// transport error regardless of its status code.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected JSON shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Check if this error is the use-before-init precondition violation
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    /// Check if this error is a request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}
