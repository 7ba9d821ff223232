//! Error types for gc-core
//!
//! Provides a unified error type so callers can branch on failure category
//! rather than parsing message text.

use thiserror::Error;

/// Result type alias for gc-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gc-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// No usable credential; the gateway is disabled
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Caller supplied an empty or missing required identifier
    #[error("Invalid argument: {0}")]
    Validation(String),

    /// The targeted bucket or object does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other failure surfaced by the backend (permissions, quota,
    /// network, precondition conflicts)
    #[error("Backend error: {0}")]
    Backend(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Operator-log severity for a failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

impl Error {
    /// Get the log severity for this error
    ///
    /// Validation and not-found failures are expected operator mistakes and
    /// log at warn level; everything else logs at error level.
    pub const fn severity(&self) -> Severity {
        match self {
            Error::Validation(_) | Error::NotFound(_) => Severity::Warn,
            _ => Severity::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        assert_eq!(Error::Validation("x".into()).severity(), Severity::Warn);
        assert_eq!(Error::NotFound("x".into()).severity(), Severity::Warn);
        assert_eq!(Error::Auth("x".into()).severity(), Severity::Error);
        assert_eq!(Error::Backend("x".into()).severity(), Severity::Error);
    }

    #[test]
    fn test_error_display() {
        let err = Error::NotFound("bucket 'logs'".into());
        assert_eq!(err.to_string(), "Not found: bucket 'logs'");

        let err = Error::Validation("bucket name cannot be empty".into());
        assert_eq!(err.to_string(), "Invalid argument: bucket name cannot be empty");
    }
}
