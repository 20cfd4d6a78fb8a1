//! Error types for the leaderboard client.

use thiserror::Error;

/// Errors that can occur when talking to the remote leaderboard.
///
/// Every variant is recoverable from the caller's point of view: the
/// affected record simply stays unsynced.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configured base URL or table path is not a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed (connect, timeout, TLS, body read).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// Server returned an unparseable body.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
