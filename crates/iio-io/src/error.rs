//! Error types for source and destination operations.
//!
//! Metadata decoding never fails (see `iio-props`); errors here come from
//! the engine boundary: opening containers, indexing frames, finalizing.

use std::io;
use thiserror::Error;

/// Image I/O error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Container (de)serialization error in the reference backend.
    #[cfg(feature = "memory")]
    #[error("container error: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine has no codec for this type identifier.
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Data could not be recognized as an image container.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Frame index past the end of the source.
    #[error("image index {index} out of range (count {count})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of images in the source.
        count: usize,
    },

    /// The engine refused to finalize the destination.
    #[error("failed to finalize destination")]
    FinalizeFailed,

    /// The destination was already finalized.
    #[error("destination already finalized")]
    AlreadyFinalized,
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
