//! # pix-ops
//!
//! Image operations over [`RgbImage`](pix_core::RgbImage) buffers.
//!
//! Every operation reads its inputs and returns a new image; inputs are
//! never modified.
//!
//! # Modules
//!
//! - [`mapper`] - Pointwise unary, HSV and binary color mapping
//! - [`filter`] - 3x3 convolution with mirrored borders
//! - [`morphology`] - Luminance-ordered erosion, dilation, opening, closing
//! - [`histogram`] - 256-bucket histograms, prefix sums, bar-chart rendering
//! - [`adjust`] - Color functions and blend modes for the mappers
//! - [`draw`] - Vertical line rasterization
//!
//! # Example
//!
//! ```rust
//! use pix_core::RgbImage;
//! use pix_ops::{convolve, erode_n, map_unary, Kernel3};
//!
//! let img = RgbImage::filled(16, 16, 0x406080);
//!
//! let blurred = convolve(&img, &Kernel3::gaussian()).unwrap();
//! let eroded = erode_n(&blurred, 2, None);
//! let negative = map_unary(&eroded, |c| pix_math::ColorVector::ONE - c);
//! assert_eq!(negative.pixel(8, 8), 0xBF9F7F);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - build output rows in parallel via rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod adjust;
pub mod draw;
pub mod filter;
pub mod histogram;
pub mod mapper;
pub mod morphology;

pub use adjust::BlendMode;
pub use error::{OpsError, OpsResult};
pub use filter::{convolve, Kernel3};
pub use histogram::{accumulate, histogram, histogram_default, render_histogram, Histogram};
pub use mapper::{map_binary, map_unary, map_unary_hsv};
pub use morphology::{close, dilate, dilate_n, erode, erode_n, open, StructuringElement};
