//! # pix-math
//!
//! Value types for per-pixel color arithmetic.
//!
//! - [`ColorVector`] - 3-component vector holding an RGB or HSV triple
//!
//! # Design
//!
//! A [`ColorVector`] carries no color space tag. The same type holds
//! normalized RGB (`x`=R, `y`=G, `z`=B) or HSV (`x`=hue, `y`=saturation,
//! `z`=value); the conversion that produced it decides the meaning.
//! No range is enforced while a color is held as a vector. Clamping happens
//! only when a vector is encoded back into an 8-bit color (see `pix-color`).
//!
//! ```rust
//! use pix_math::ColorVector;
//!
//! let a = ColorVector::new(0.2, 0.4, 0.6);
//! let b = ColorVector::splat(0.1);
//! let mixed = (a + b) * 0.5;
//! assert!((mixed.y - 0.25).abs() < 1e-6);
//! ```
//!
//! # Used By
//!
//! - `pix-color` - RGB/HSV conversion
//! - `pix-ops` - mapping, convolution and morphology engines

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod vector;

pub use vector::*;
