//! Authentication and authorization errors.

use thiserror::Error;

/// Errors raised when Recurly rejects the request's credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The API key cannot be sent as an HTTP header.
    #[error("Invalid API key format")]
    InvalidKeyFormat,

    /// Server rejected the API key (HTTP 401).
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message from the server.
        message: String,
    },

    /// The key is valid but not allowed to perform the call (HTTP 403).
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The method and path that was denied.
        operation: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failed_display() {
        let err = AuthError::AuthenticationFailed {
            message: "HTTP Basic: Access denied.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Authentication failed: HTTP Basic: Access denied."
        );
    }

    #[test]
    fn test_insufficient_permissions() {
        let err = AuthError::InsufficientPermissions {
            operation: "DELETE accounts/abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient permissions: DELETE accounts/abc"
        );
    }
}
