//! Error types and handling infrastructure for rowfilter.
//!
//! Filtering itself never fails: malformed criteria fall back to substring
//! matching. The errors here cover the ambient surfaces around the filter
//! engine, namely record loading, configuration, and the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rowfilter operations.
#[derive(Error, Debug)]
pub enum RowFilterError {
    /// File system related errors (permission denied, read failures, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Record file could not be parsed into records
    #[error("Invalid record file {path}: {message}")]
    RecordSource { path: PathBuf, message: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration file or value errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Standard Result type for rowfilter operations.
pub type Result<T> = std::result::Result<T, RowFilterError>;

impl RowFilterError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a RecordSource error for the given file
    pub fn record_source(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::RecordSource {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for RowFilterError {
    fn from(err: std::io::Error) -> Self {
        let message = match err.kind() {
            std::io::ErrorKind::NotFound => "File not found",
            std::io::ErrorKind::PermissionDenied => "Permission denied",
            _ => "IO operation failed",
        };
        Self::FileError {
            message: message.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let path = PathBuf::from("/test/users.toml");

        let not_found = RowFilterError::FileNotFound { path: path.clone() };
        assert_eq!(not_found.to_string(), "File not found: /test/users.toml");

        let bad_records = RowFilterError::record_source(path, "missing field `age`");
        assert_eq!(
            bad_records.to_string(),
            "Invalid record file /test/users.toml: missing field `age`"
        );

        let config = RowFilterError::config("unknown theme `neon`");
        assert_eq!(
            config.to_string(),
            "Configuration error: unknown theme `neon`"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            RowFilterError::ui("Terminal resize failed"),
            RowFilterError::UIError { .. }
        ));
        assert!(matches!(
            RowFilterError::invalid_argument("--placeholder must not be empty"),
            RowFilterError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: RowFilterError = io_err.into();

        match err {
            RowFilterError::FileError { message, .. } => {
                assert_eq!(message, "Permission denied");
            }
            _ => panic!("Expected FileError variant"),
        }
    }
}
