//! Error types for the project crate.
//!
//! Only path file operations surface these to callers; bootstrap and config
//! IO log them and carry on.

use ptpkit_core::CodecError;
use std::io;
use thiserror::Error;

/// Errors that can occur during path file operations.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// No project directory has been selected yet.
    #[error("No project directory selected")]
    NoProject,

    /// The named path file does not exist in the paths directory.
    #[error("Path file not found: {0}")]
    PathNotFound(String),

    /// The name is not a plain file name inside the paths directory.
    #[error("Invalid path file name: {0:?}")]
    InvalidFileName(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// The file is not valid JSON.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The JSON document is not a valid path.
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}

/// Result type alias for project operations.
pub type ProjectResult<T> = Result<T, ProjectError>;
