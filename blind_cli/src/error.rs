//! CLI error types and exit codes.

use blind_core::errors::FrameError;

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error: files, serialization, missing records
    pub const GENERAL_ERROR: i32 = 1;
    /// The frame parameters or a command argument were rejected
    pub const INVALID_INPUT: i32 = 2;
    /// A piece does not fit on the stock board
    pub const UNSATISFIABLE: i32 = 3;
    /// The project file is locked by someone else
    pub const LOCKED: i32 = 4;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error reported by the frame engine or project storage
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// Reading `--frame` or writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON input or output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command was given arguments it cannot act on
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Frame(FrameError::InvalidInput { .. }) | Self::Usage(_) => exit_codes::INVALID_INPUT,
            Self::Frame(FrameError::UnsatisfiablePiece { .. }) => exit_codes::UNSATISFIABLE,
            Self::Frame(FrameError::FileLocked { .. }) => exit_codes::LOCKED,
            Self::Frame(_) | Self::Io(_) | Self::Json(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
