//! 3x3 convolution.
//!
//! # Kernels
//!
//! - [`Kernel3::identity`] - copies the image
//! - [`Kernel3::box_blur`] - simple average blur
//! - [`Kernel3::gaussian`] - 1-2-1 binomial blur
//! - [`Kernel3::sharpen`] - Laplacian sharpening
//! - [`Kernel3::edge_detect`] - Laplacian edges
//! - [`Kernel3::emboss`] - directional relief
//!
//! # Borders
//!
//! Neighbors outside the image are mirrored across the pixel *next to* the
//! edge, not the edge itself: index `-1` reads index `1`, and index `limit`
//! reads `limit - 2`. See [`mirror_index`].
//!
//! # Example
//!
//! ```rust
//! use pix_core::RgbImage;
//! use pix_ops::filter::{convolve, Kernel3};
//!
//! let src = RgbImage::filled(8, 8, 0x808080);
//! let blurred = convolve(&src, &Kernel3::box_blur()).unwrap();
//! assert_eq!(blurred.pixel(0, 0), 0x808080);
//! ```

use crate::{OpsError, OpsResult};
use pix_color::{to_packed_rgb, to_vector};
use pix_core::RgbImage;
use pix_math::ColorVector;
use tracing::trace;

/// 3x3 convolution kernel.
///
/// Weights are stored row-major: `weights[ky][kx]` multiplies the neighbor at
/// offset `(kx - 1, ky - 1)`. Weights are not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel3 {
    /// Kernel weights, `[row][column]`.
    pub weights: [[f32; 3]; 3],
}

impl Kernel3 {
    /// Creates a kernel from three rows.
    pub const fn from_rows(weights: [[f32; 3]; 3]) -> Self {
        Self { weights }
    }

    /// Creates a kernel from flat row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidKernel`] unless the shape is 3x3 and
    /// `data` holds exactly 9 weights.
    pub fn new(data: &[f32], width: usize, height: usize) -> OpsResult<Self> {
        if width != 3 || height != 3 {
            return Err(OpsError::InvalidKernel(format!(
                "only 3x3 kernels are supported, got {}x{}",
                width, height
            )));
        }
        if data.len() != width * height {
            return Err(OpsError::InvalidKernel(format!(
                "kernel data size {} doesn't match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        let mut weights = [[0.0; 3]; 3];
        for (i, &w) in data.iter().enumerate() {
            weights[i / 3][i % 3] = w;
        }
        Ok(Self { weights })
    }

    /// Creates a kernel from a list of rows of any length.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidKernel`] for anything but 3 rows of 3.
    pub fn from_nested<R: AsRef<[f32]>>(rows: &[R]) -> OpsResult<Self> {
        if rows.len() != 3 {
            return Err(OpsError::InvalidKernel(format!(
                "expected 3 rows, got {}",
                rows.len()
            )));
        }
        let mut weights = [[0.0; 3]; 3];
        for (ky, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != 3 {
                return Err(OpsError::InvalidKernel(format!(
                    "row {} has {} weights, expected 3",
                    ky,
                    row.len()
                )));
            }
            weights[ky].copy_from_slice(row);
        }
        Ok(Self { weights })
    }

    /// Kernel that reproduces its input.
    pub const fn identity() -> Self {
        Self::from_rows([[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]])
    }

    /// Box blur kernel (simple average).
    ///
    /// ```rust
    /// use pix_ops::filter::Kernel3;
    ///
    /// assert!((Kernel3::box_blur().sum() - 1.0).abs() < 1e-6);
    /// ```
    pub const fn box_blur() -> Self {
        const W: f32 = 1.0 / 9.0;
        Self::from_rows([[W, W, W], [W, W, W], [W, W, W]])
    }

    /// Binomial approximation of a Gaussian blur.
    pub const fn gaussian() -> Self {
        Self::from_rows([
            [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
            [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
            [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
        ])
    }

    /// Sharpening kernel.
    ///
    /// # Arguments
    ///
    /// * `amount` - Sharpening strength (0.5-2.0 typical)
    pub fn sharpen(amount: f32) -> Self {
        let center = 1.0 + 4.0 * amount;
        Self::from_rows([
            [0.0, -amount, 0.0],
            [-amount, center, -amount],
            [0.0, -amount, 0.0],
        ])
    }

    /// Laplacian edge detection kernel.
    pub const fn edge_detect() -> Self {
        Self::from_rows([[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]])
    }

    /// Emboss kernel.
    pub const fn emboss() -> Self {
        Self::from_rows([[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]])
    }

    /// Weight applied to the neighbor at offset `(kx - 1, ky - 1)`.
    #[inline]
    pub fn weight(&self, kx: usize, ky: usize) -> f32 {
        self.weights[ky][kx]
    }

    /// Sum of all weights (1.0 preserves brightness).
    pub fn sum(&self) -> f32 {
        self.weights.iter().flatten().sum()
    }
}

impl Default for Kernel3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Resolves an out-of-range index by mirroring across the second pixel from
/// each edge.
///
/// `i < 0` becomes `1`, `i >= limit` becomes `limit - 2`. Valid only for
/// offsets of at most one pixel and `limit >= 2`.
///
/// ```rust
/// use pix_ops::filter::mirror_index;
///
/// assert_eq!(mirror_index(-1, 10), 1);
/// assert_eq!(mirror_index(10, 10), 8);
/// assert_eq!(mirror_index(4, 10), 4);
/// ```
#[inline]
pub fn mirror_index(i: i64, limit: i64) -> i64 {
    if i < 0 {
        1
    } else if i >= limit {
        limit - 2
    } else {
        i
    }
}

/// Convolves an image with a 3x3 kernel.
///
/// Each output pixel is the weighted sum of the RGB vectors of its nine
/// neighbors, clamped and re-quantized to 8 bits. Out-of-bounds neighbors
/// are resolved with [`mirror_index`].
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] if the image is narrower or
/// shorter than 2 pixels (but not empty), since the mirror would leave the
/// image. Empty images yield an empty result.
pub fn convolve(image: &RgbImage, kernel: &Kernel3) -> OpsResult<RgbImage> {
    let (width, height) = image.dimensions();
    trace!(width, height, "convolve");

    if image.is_empty() {
        return Ok(RgbImage::new(width, height));
    }
    if width < 2 || height < 2 {
        return Err(OpsError::InvalidDimensions(format!(
            "mirrored convolution needs at least 2x2 pixels, got {}x{}",
            width, height
        )));
    }

    let (w, h) = (width as i64, height as i64);
    let out = RgbImage::from_fn(width, height, |x, y| {
        let mut sum = ColorVector::ZERO;
        for kx in 0..3 {
            for ky in 0..3 {
                let sx = mirror_index(x as i64 + kx as i64 - 1, w);
                let sy = mirror_index(y as i64 + ky as i64 - 1, h);
                let px = image.pixel(sx as u32, sy as u32);
                sum = sum + to_vector(px) * kernel.weight(kx, ky);
            }
        }
        to_packed_rgb(sum)
    });

    Ok(out)
}
