//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// These cover network-level failures and status codes that have no more
/// specific meaning in [`ApiError`](super::ApiError).
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to a network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a 5xx status.
    #[error("Server error {status}: {message}")]
    Server {
        /// The HTTP status code returned.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// Server returned any other non-success status (400, 402, 406, 412, ...).
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Error message from the response body.
        message: String,
    },
}

impl ClientError {
    /// Returns `true` if the server, not the request, was at fault.
    pub fn is_server_error(&self) -> bool {
        match self {
            Self::Server { .. } => true,
            Self::Request(e) => e.status().is_some_and(|s| s.is_server_error()),
            Self::HttpStatus { .. } => false,
        }
    }

    /// Returns `true` if the request never got a response.
    pub fn is_transport_failure(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            _ => false,
        }
    }

    /// Returns the HTTP status code if one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
