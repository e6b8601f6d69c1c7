//! Error types for the lookout hooks.
//!
//! None of these errors ever reaches the host: each binary logs them and
//! falls back to the permissive outcome. They exist so the library crates
//! can propagate failures with `?` up to that single decision point.

use thiserror::Error;

/// The unified error type for the lookout crates.
#[derive(Debug, Error)]
pub enum LookoutError {
    /// Standard input was empty, not JSON, or not a request object.
    #[error("malformed request: {reason}")]
    MalformedRequest { reason: String },

    /// A log entry could not be appended to the event log.
    #[error("audit write failed: {reason}")]
    AuditWriteFailed { reason: String },

    /// The hook response could not be serialized or written to stdout.
    #[error("response write failed: {reason}")]
    ResponseWriteFailed { reason: String },

    /// A configuration file is unreadable or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the lookout crates.
pub type LookoutResult<T> = Result<T, LookoutError>;
