//! # Error Types
//!
//! Structured error types for blind_core. Every variant carries enough
//! context for a front-end to tell the user what to fix without parsing
//! message strings.
//!
//! ## Example
//!
//! ```rust
//! use blind_core::errors::{FrameError, FrameResult};
//!
//! fn validate_spacing(spacing: f64) -> FrameResult<()> {
//!     if spacing <= 0.0 {
//!         return Err(FrameError::invalid_input(
//!             "support_spacing",
//!             spacing.to_string(),
//!             "Support spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_spacing(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for blind_core operations
pub type FrameResult<T> = Result<T, FrameError>;

/// Structured error type for frame and cut-list operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FrameError {
    /// An input value is invalid (non-positive, frame too small, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required piece is longer than the stock it must be cut from
    #[error("Piece of length {length} cannot be cut from stock of length {stock_length}")]
    UnsatisfiablePiece { length: f64, stock_length: f64 },

    /// A named item (frame record, project) does not exist
    #[error("{what} not found: {name}")]
    NotFound { what: String, name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FrameError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FrameError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsatisfiablePiece error
    pub fn unsatisfiable_piece(length: f64, stock_length: f64) -> Self {
        FrameError::UnsatisfiablePiece { length, stock_length }
    }

    /// Create a NotFound error
    pub fn not_found(what: impl Into<String>, name: impl Into<String>) -> Self {
        FrameError::NotFound {
            what: what.into(),
            name: name.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FrameError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        FrameError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Create a SerializationError from any displayable cause
    pub fn serialization(reason: impl ToString) -> Self {
        FrameError::SerializationError {
            reason: reason.to_string(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FrameError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FrameError::InvalidInput { .. } => "INVALID_INPUT",
            FrameError::UnsatisfiablePiece { .. } => "UNSATISFIABLE_PIECE",
            FrameError::NotFound { .. } => "NOT_FOUND",
            FrameError::FileError { .. } => "FILE_ERROR",
            FrameError::FileLocked { .. } => "FILE_LOCKED",
            FrameError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FrameError::VersionMismatch { .. } => "VERSION_MISMATCH",
            FrameError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = FrameError::invalid_input("width", "-5", "Width must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: FrameError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FrameError::unsatisfiable_piece(7000.0, 6000.0).error_code(), "UNSATISFIABLE_PIECE");
        assert_eq!(FrameError::not_found("Frame", "kitchen").error_code(), "NOT_FOUND");
        assert!(FrameError::file_locked("a.blind", "me", "now").is_recoverable());
        assert!(!FrameError::serialization("bad json").is_recoverable());
    }

    #[test]
    fn test_unsatisfiable_message() {
        let error = FrameError::unsatisfiable_piece(6500.0, 6000.0);
        assert_eq!(
            error.to_string(),
            "Piece of length 6500 cannot be cut from stock of length 6000"
        );
    }
}
