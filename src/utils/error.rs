//! Error handling for fragment emission
//!
//! This module provides a unified error type and result type for all
//! emission operations.

use std::fmt;

/// Emission error type
#[derive(Debug, Clone)]
pub enum EmitError {
    /// Invalid argument supplied by the caller
    InvalidArgument { message: String },
    /// Row or header length does not match the table's column count
    ShapeMismatch {
        what: String,
        expected: usize,
        found: usize,
    },
    /// IO error (for file operations)
    Io { message: String },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}", message)
            }
            EmitError::ShapeMismatch {
                what,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Shape mismatch: {} has {} entries, expected {}",
                    what, found, expected
                )
            }
            EmitError::Io { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for EmitError {}

impl From<std::io::Error> for EmitError {
    fn from(err: std::io::Error) -> Self {
        EmitError::Io {
            message: err.to_string(),
        }
    }
}

/// Result type for emission operations
pub type EmitResult<T> = Result<T, EmitError>;

// Convenience constructors for errors
impl EmitError {
    pub fn invalid(message: impl Into<String>) -> Self {
        EmitError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn shape(what: impl Into<String>, expected: usize, found: usize) -> Self {
        EmitError::ShapeMismatch {
            what: what.into(),
            expected,
            found,
        }
    }
}
