//! Opt-in logging of request and response bodies.
//!
//! Bodies carry names, emails, addresses and card details, so they are never
//! logged unless the process runs with `RECURLY_INSECURE_DEBUG=true` *and*
//! the application calls [`enable_request_logging`]. Request spans (method,
//! URL, status) are always emitted through `tracing`; this switch only
//! governs the bodies.

use std::sync::atomic::{AtomicBool, Ordering};

/// Environment variable that unlocks body logging.
pub const INSECURE_DEBUG_ENV: &str = "RECURLY_INSECURE_DEBUG";

static BODY_LOGGING: AtomicBool = AtomicBool::new(false);

/// Returns `true` when `RECURLY_INSECURE_DEBUG` is set to `true` (any case).
pub fn insecure_debug_allowed() -> bool {
    std::env::var(INSECURE_DEBUG_ENV).is_ok_and(|v| v.trim().eq_ignore_ascii_case("true"))
}

/// Turns on body logging if the environment allows it.
///
/// Returns whether logging is now enabled. Either way a warning is emitted,
/// because enabled body logs leak PII and disabled ones surprise whoever
/// asked for them.
pub fn enable_request_logging() -> bool {
    if insecure_debug_allowed() {
        BODY_LOGGING.store(true, Ordering::Relaxed);
        tracing::warn!(
            "Recurly request logging enabled. Logged bodies may contain PII and \
             must never be captured in production environments."
        );
        true
    } else {
        tracing::warn!(
            "Recurly request logging has been disabled. To use it outside production, \
             set the `{INSECURE_DEBUG_ENV}` environment variable to `true`."
        );
        false
    }
}

/// Turns body logging off.
pub fn disable_request_logging() {
    BODY_LOGGING.store(false, Ordering::Relaxed);
}

/// Returns `true` if bodies should be logged.
pub fn request_logging_enabled() -> bool {
    BODY_LOGGING.load(Ordering::Relaxed)
}

pub(crate) fn log_body(direction: &'static str, body: &[u8]) {
    if request_logging_enabled() {
        tracing::debug!(direction, body = %String::from_utf8_lossy(body), "recurly payload");
    }
}
