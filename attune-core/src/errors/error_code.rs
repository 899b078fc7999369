//! Stable error codes for machine-readable reporting.

/// Every error in the workspace exposes a stable SCREAMING_SNAKE code
/// that survives message-text changes.
pub trait AttuneErrorCode {
    fn error_code(&self) -> &'static str;
}
