//! Top-level API error type.

use super::{AuthError, ClientError, ConfigError, FieldErrors, FormatError};
use thiserror::Error;

/// Top-level error type for all Recurly operations.
///
/// None of these are retried automatically. Validation failures carry the
/// server's per-field messages so the caller can correct the input and try
/// again.
///
/// ## Examples
///
/// ```rust,ignore
/// use recurly::ApiError;
///
/// match client.save_strict(&mut account).await {
///     Ok(()) => {}
///     Err(ApiError::Invalid(errors)) => {
///         for message in errors.get("account_code") {
///             eprintln!("account_code {message}");
///         }
///     }
///     Err(ApiError::NotFound { message }) => eprintln!("gone: {message}"),
///     Err(other) => return Err(other),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The client is missing configuration or was configured badly.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The server rejected the credentials.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Network failure, server error or an unexpected status code.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A request or response body could not be (de)serialized.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The resource does not exist (HTTP 404, or a lookup with an empty identifier).
    #[error("Not found: {message}")]
    NotFound {
        /// Description returned by the server.
        message: String,
    },

    /// The server refused the payload (HTTP 422).
    #[error("Validation failed: {0}")]
    Invalid(FieldErrors),

    /// An identifier was modified on a record that already exists remotely.
    #[error("Attribute `{field}` cannot change once the resource exists")]
    ImmutableAttribute {
        /// The identifier attribute that was modified.
        field: &'static str,
    },
}

impl ApiError {
    /// Returns the HTTP status code behind this error, when there is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            Self::Auth(AuthError::AuthenticationFailed { .. }) => Some(401),
            Self::Auth(AuthError::InsufficientPermissions { .. }) => Some(403),
            Self::NotFound { .. } => Some(404),
            Self::Invalid(_) => Some(422),
            _ => None,
        }
    }

    /// Returns the field errors of a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns `true` for a 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
