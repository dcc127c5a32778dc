//! Layered error types for the Recurly client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type returned by every operation
//! - [`ClientError`] - Transport failures and unexpected HTTP statuses
//! - [`FormatError`] - Body encoding and decoding failures
//! - [`AuthError`] - Rejected credentials (401/403)
//! - [`ConfigError`] - Missing or invalid client configuration
//! - [`FieldErrors`] - Field-level validation messages from a 422 response

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod field_errors;
mod format_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use field_errors::{FieldError, FieldErrors};
pub use format_error::FormatError;
