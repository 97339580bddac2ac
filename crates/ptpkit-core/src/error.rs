//! Error types for the core crate.
//!
//! Path documents are produced and consumed by a [`PathCodec`](crate::PathCodec);
//! everything that can go wrong while converting between a [`Path`](crate::Path)
//! and its file-native structure is reported as a [`CodecError`].

use thiserror::Error;

/// Errors that can occur while encoding or decoding a path document.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The document is structurally not a path document.
    #[error("Invalid path document: {0}")]
    InvalidDocument(String),

    /// A path element carries a type tag the codec does not know.
    #[error("Unknown path element type: {0}")]
    UnknownElementType(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
