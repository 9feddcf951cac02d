//! # pix-core
//!
//! Core types shared by every pix-rs crate:
//!
//! - [`PackedRgb`] - 24-bit `0x00RRGGBB` color and its channel helpers
//! - [`RgbImage`] - rectangular grid of packed colors
//! - [`Error`] - buffer construction and access errors
//!
//! ## Crate Structure
//!
//! ```text
//! pix-math (ColorVector)
//!    ^
//!    |
//! pix-core (this crate) <-- pix-io (codec)
//!    ^
//!    |
//! pix-color (RGB/HSV conversion)
//!    ^
//!    |
//! pix-ops (mapper, convolution, morphology, histogram)
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` - fill output buffers row-parallel in [`RgbImage::from_fn`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::*;
pub use image::*;
pub use pixel::*;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::RgbImage;
    pub use crate::pixel::{pack_rgb, unpack_rgb, PackedRgb, BLACK, WHITE};
}
