//! Error types for rewind operations.
//!
//! This module defines [`RewindError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A history position with no stored value is *not* an error: undo/redo log
//!   a warning and return `None`.
//! - Bad configuration (including `max_history == 0`) is rejected up front.
//! - A snapshot that cannot be serialized fails the save before anything is
//!   written to the store.
//! - Use `anyhow::Error` (via `RewindError::Other`) for unexpected errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for rewind operations.
#[derive(Debug, Error)]
pub enum RewindError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A state could not be converted to or from its JSON form.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A state serialized to something other than a JSON object.
    #[error("Snapshot must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },

    /// A cursor key holds a value that is not a position.
    #[error("Cursor '{key}' holds an invalid position: {value:?}")]
    InvalidCursor { key: String, value: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for rewind operations.
pub type Result<T> = std::result::Result<T, RewindError>;
