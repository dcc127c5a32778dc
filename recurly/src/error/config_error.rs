//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These occur before any request is sent and indicate that the process,
/// thread or builder was not set up correctly.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither a thread override nor a process default provides an API key.
    #[error("RecurlyV2.api_key not configured")]
    MissingApiKey,

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot have path segments appended to it.
    #[error("Base URL cannot be used for resource paths: {url}")]
    UnsupportedBaseUrl {
        /// The offending URL.
        url: String,
    },

    /// A default header name or value is not valid HTTP.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The header name as given.
        name: String,
        /// Why it was rejected.
        message: String,
    },
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.into(),
        }
    }
}
