//! Error types for image operations.

use thiserror::Error;

/// Error type for image operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// Image dimensions don't allow the operation.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Kernel or structuring element is not 3x3.
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// A histogram mapper returned a value outside 0..=255.
    #[error("histogram mapper returned {value} for pixel ({x}, {y}), expected 0..=255")]
    MapperOutOfRange {
        /// Value returned by the mapper
        value: i32,
        /// Pixel x
        x: u32,
        /// Pixel y
        y: u32,
    },

    /// Buffer error from pix-core.
    #[error(transparent)]
    Core(#[from] pix_core::Error),
}

/// Result type for image operations.
pub type OpsResult<T> = Result<T, OpsError>;
