//! Pixel buffer type.
//!
//! [`RgbImage`] is a width x height grid of [`PackedRgb`] values stored
//! row-major, top-to-bottom:
//!
//! ```text
//! Memory: [p(0,0) p(1,0) ... p(W-1,0)]  <- Row 0
//!         [p(0,1) p(1,1) ... p(W-1,1)]  <- Row 1
//!         ...
//! ```
//!
//! # Memory Management
//!
//! The buffer lives in an [`Arc<Vec<u32>>`]. Cloning an image shares the
//! storage; mutation goes through copy-on-write. Engines never mutate their
//! inputs: every transform builds a fresh buffer with [`RgbImage::from_fn`].
//!
//! ```rust
//! use pix_core::{pack_rgb, RgbImage};
//!
//! let img = RgbImage::from_fn(4, 2, |x, y| pack_rgb(x as u8 * 60, y as u8 * 100, 0));
//! assert_eq!(img.pixel(3, 1), pack_rgb(180, 100, 0));
//! ```

use crate::{Error, PackedRgb, Result, BLACK, RGB_MASK};
use std::sync::Arc;

/// Owned 24-bit RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    /// Pixel data buffer (Arc for cheap cloning)
    data: Arc<Vec<PackedRgb>>,
    width: u32,
    height: u32,
}

impl RgbImage {
    /// Creates a black image.
    ///
    /// # Panics
    ///
    /// Panics if allocation fails (extremely large images).
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, BLACK)
    }

    /// Creates an image filled with one color.
    pub fn filled(width: u32, height: u32, color: PackedRgb) -> Self {
        let count = width as usize * height as usize;
        Self {
            data: Arc::new(vec![color & RGB_MASK; count]),
            width,
            height,
        }
    }

    /// Creates an image from existing row-major pixel data.
    ///
    /// The top byte of every value is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if data length doesn't match.
    pub fn from_data(width: u32, height: u32, mut data: Vec<PackedRgb>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, data.len()),
            ));
        }
        for px in &mut data {
            *px &= RGB_MASK;
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Builds an image by evaluating `f(x, y)` for every pixel.
    ///
    /// With the `rayon` feature rows are filled in parallel. `f` must not
    /// depend on evaluation order.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> PackedRgb + Sync,
    {
        let w = width as usize;
        let mut data = vec![BLACK; w * height as usize];

        let fill_row = |(y, row): (usize, &mut [PackedRgb])| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = f(x as u32, y as u32) & RGB_MASK;
            }
        };

        if w > 0 {
            #[cfg(feature = "rayon")]
            {
                use rayon::prelude::*;
                data.par_chunks_mut(w).enumerate().for_each(fill_row);
            }
            #[cfg(not(feature = "rayon"))]
            data.chunks_mut(w).enumerate().for_each(fill_row);
        }

        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[PackedRgb] {
        &self.data
    }

    /// Returns a mutable reference to the pixel data.
    ///
    /// If the data is shared (Arc refcount > 1), this will clone the data
    /// to ensure exclusive access (copy-on-write). Readers ignore the top
    /// byte, so callers should write 24-bit values only.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [PackedRgb] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Returns `true` if both images point at the same storage.
    #[inline]
    pub fn shares_buffer(&self, other: &RgbImage) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Returns `true` if signed coordinates address a pixel of this image.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> PackedRgb {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[self.offset(x, y)]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<PackedRgb> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if (x, y) is outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: PackedRgb) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        let offset = self.offset(x, y);
        Arc::make_mut(&mut self.data)[offset] = color & RGB_MASK;
        Ok(())
    }

    /// Fills the entire image with one color.
    pub fn fill(&mut self, color: PackedRgb) {
        Arc::make_mut(&mut self.data).fill(color & RGB_MASK);
    }

    /// Returns a row of pixels as a slice.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[PackedRgb] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterates over `(x, y, color)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, PackedRgb)> + '_ {
        let w = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i as u32) % w, (i as u32) / w, c))
    }
}
