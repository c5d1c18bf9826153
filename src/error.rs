//! Unified error types for table-view-state.
//!
//! Decoding a query string never fails; malformed parameters fall back to
//! defaults. Errors only surface from stores that touch the outside world
//! and from configuration loading.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for table-view-state operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ViewStateError {
    /// Errors reading or writing a view-state store
    #[error("View-state store failed: {context}")]
    Store {
        context: String,
        #[source]
        source: StoreErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific store error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StoreErrorKind {
    #[error("Store is read-only")]
    ReadOnly,

    #[error("Persisted state is not valid UTF-8")]
    InvalidEncoding,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for table-view-state operations
pub type Result<T> = std::result::Result<T, ViewStateError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl ViewStateError {
    /// Create a store error with context
    pub fn store(context: impl Into<String>, source: StoreErrorKind) -> Self {
        Self::Store {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for ViewStateError {
    fn from(err: std::io::Error) -> Self {
        let message = format!("{err}");
        Self::Io {
            path: None,
            message,
            source: err,
        }
    }
}

impl From<crate::config::ConfigFileError> for ViewStateError {
    fn from(err: crate::config::ConfigFileError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        let err = ViewStateError::store("writing view.qs", StoreErrorKind::ReadOnly);
        assert_eq!(err.to_string(), "View-state store failed: writing view.qs");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_keeps_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ViewStateError::io("/tmp/view.qs", source);
        match err {
            ViewStateError::Io { path, message, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/view.qs")));
                assert_eq!(message, "gone");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
