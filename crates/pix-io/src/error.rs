//! Error types for codec operations.

use std::io;
use thiserror::Error;

/// Codec error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unrecognized or disabled format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Color type or bit depth the decoder does not handle.
    #[error("unsupported bit depth: {0}")]
    UnsupportedBitDepth(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Decoded pixels did not form a valid image.
    #[error(transparent)]
    Core(#[from] pix_core::Error),
}

/// Result type for codec operations.
pub type IoResult<T> = Result<T, IoError>;
