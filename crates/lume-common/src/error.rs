//! Unified error types for the Lume workspace.
//!
//! Event polling and fuzzy matching never fail; these variants cover the
//! peripheral platform calls, configuration loading, and host argument
//! validation.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LumeError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A host argument is not one of the accepted options.
    #[error("invalid option '{value}' for {argument} (expected one of: {expected})")]
    InvalidOption {
        /// Name of the rejected argument.
        argument: &'static str,
        /// The value that was supplied.
        value: String,
        /// Comma-separated list of accepted values.
        expected: String,
    },

    /// A native platform call failed.
    #[error("{operation} failed: {message}")]
    Platform {
        /// The platform operation that was attempted.
        operation: &'static str,
        /// Description reported by the platform.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

impl LumeError {
    /// Wraps an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds a platform error from any displayable cause.
    pub fn platform(operation: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Platform {
            operation,
            message: message.to_string(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LumeError>;
