//! # pix-color
//!
//! Conversions between the three color representations used by pix-rs:
//!
//! ```text
//!              to_vector                 to_hsv
//!   PackedRgb ----------> ColorVector   PackedRgb ------> ColorVector
//!   (0xRRGGBB) <--------- (RGB, 0..1)   (0xRRGGBB)        (HSV, 0..1)
//!            to_packed_rgb                   from_hsv: HSV -> RGB vector
//! ```
//!
//! - [`convert`] - packed RGB <-> RGB vector, 8-bit quantization
//! - [`hsv`] - RGB <-> HSV
//! - [`extract`] - 0..=255 scalar extractors used as histogram mappers
//! - [`compare`] - tolerance-based float equality
//!
//! # Quantization
//!
//! Vectors are encoded by clamping each component to [0, 1] and then
//! taking `floor(v * 255 + 0.5)`. Decoding divides by 255, so every 24-bit
//! color survives a decode/encode cycle unchanged:
//!
//! ```rust
//! use pix_color::{to_packed_rgb, to_vector};
//!
//! for rgb in [0x000000, 0x7F80FF, 0x010203, 0xFFFFFF] {
//!     assert_eq!(to_packed_rgb(to_vector(rgb)), rgb);
//! }
//! ```
//!
//! # Dependencies
//!
//! - [`pix-core`] - packed color helpers
//! - [`pix-math`] - [`ColorVector`](pix_math::ColorVector)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod compare;
pub mod convert;
pub mod extract;
pub mod hsv;

pub use compare::{approx_eq, vectors_approx_eq, DEFAULT_EPSILON};
pub use convert::{luminance, quantize8, to_packed_rgb, to_vector, LUMA_WEIGHTS};
pub use extract::{blue_channel8, green_channel8, hue8, red_channel8, saturation8, value8};
pub use hsv::{from_hsv, hsv_to_packed, to_hsv};
