//! HTTP error vocabulary shared by the API port and its adapters

use thiserror::Error;

/// Errors produced by an activities API call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response (network error, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-2xx status
    #[error("Server returned HTTP {status}")]
    Http { status: u16, detail: Option<String> },

    /// The response body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}
