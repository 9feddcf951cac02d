//! Luminance-ordered morphology.
//!
//! Color pixels have no natural order, so these operators rank neighbors by
//! luma (`0.299 R + 0.587 G + 0.114 B`) and copy the *whole color* of the
//! winning neighbor. Erosion picks the darkest neighbor, dilation the
//! brightest.
//!
//! # Neighborhood
//!
//! A [`StructuringElement`] flags which of the nine 3x3 offsets take part.
//! Offsets that fall outside the image are skipped, not mirrored. If no
//! neighbor qualifies (only possible with an all-false element), the output
//! pixel is black.
//!
//! Ties are broken by scan order: offsets are visited column by column
//! (`kx` outer, `ky` inner) and a later neighbor replaces the current
//! choice only if it is strictly darker (erode) or strictly brighter
//! (dilate).
//!
//! # Example
//!
//! ```rust
//! use pix_core::RgbImage;
//! use pix_ops::morphology::{dilate, open};
//!
//! let mut img = RgbImage::new(5, 5);
//! img.set_pixel(2, 2, 0xFFFFFF).unwrap();
//!
//! let grown = dilate(&img, None);
//! assert_eq!(grown.pixel(2, 1), 0xFFFFFF);
//! assert_eq!(grown.pixel(1, 1), 0x000000); // corners are not in the cross
//!
//! // A single bright pixel does not survive an opening
//! assert!(open(&img, 1, None).data().iter().all(|&p| p == 0));
//! ```

use crate::mapper::map_binary;
use crate::{OpsError, OpsResult};
use pix_color::{luminance, to_vector};
use pix_core::{PackedRgb, RgbImage, BLACK};
use tracing::{debug, trace};

/// 3x3 boolean neighborhood mask.
///
/// `mask[ky][kx]` enables the neighbor at offset `(kx - 1, ky - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuringElement {
    /// Participation flags, `[row][column]`.
    pub mask: [[bool; 3]; 3],
}

impl StructuringElement {
    /// Creates an element from three rows.
    pub const fn from_mask(mask: [[bool; 3]; 3]) -> Self {
        Self { mask }
    }

    /// Creates an element from flat row-major flags.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidKernel`] unless the shape is 3x3 and
    /// `flags` holds exactly 9 values.
    pub fn new(flags: &[bool], width: usize, height: usize) -> OpsResult<Self> {
        if width != 3 || height != 3 || flags.len() != 9 {
            return Err(OpsError::InvalidKernel(format!(
                "structuring element must be 3x3 with 9 flags, got {}x{} with {}",
                width,
                height,
                flags.len()
            )));
        }
        let mut mask = [[false; 3]; 3];
        for (i, &on) in flags.iter().enumerate() {
            mask[i / 3][i % 3] = on;
        }
        Ok(Self { mask })
    }

    /// Center plus its four edge neighbors.
    pub const fn cross() -> Self {
        Self::from_mask([[false, true, false], [true, true, true], [false, true, false]])
    }

    /// All nine neighbors.
    pub const fn square() -> Self {
        Self::from_mask([[true; 3]; 3])
    }

    /// Center plus its four corner neighbors.
    pub const fn diagonal() -> Self {
        Self::from_mask([[true, false, true], [false, true, false], [true, false, true]])
    }

    /// Returns `true` if offset `(kx - 1, ky - 1)` participates.
    #[inline]
    pub fn contains(&self, kx: usize, ky: usize) -> bool {
        self.mask[ky][kx]
    }
}

/// Element used when none is supplied.
const DEFAULT_ELEMENT: StructuringElement = StructuringElement::cross();

impl Default for StructuringElement {
    fn default() -> Self {
        Self::cross()
    }
}

#[derive(Debug, Clone, Copy)]
enum Extremum {
    Darkest,
    Brightest,
}

impl Extremum {
    #[inline]
    fn prefers(self, candidate: f32, current: f32) -> bool {
        match self {
            Self::Darkest => candidate < current,
            Self::Brightest => candidate > current,
        }
    }
}

fn select(image: &RgbImage, element: &StructuringElement, pick: Extremum) -> RgbImage {
    let (width, height) = image.dimensions();
    let w = width as usize;
    let luma: Vec<f32> = image
        .data()
        .iter()
        .map(|&px| luminance(to_vector(px)))
        .collect();
    let data = image.data();

    RgbImage::from_fn(width, height, |x, y| {
        let mut best: Option<(f32, PackedRgb)> = None;
        for kx in 0..3 {
            for ky in 0..3 {
                if !element.contains(kx, ky) {
                    continue;
                }
                let sx = x as i64 + kx as i64 - 1;
                let sy = y as i64 + ky as i64 - 1;
                if !image.contains(sx, sy) {
                    continue;
                }
                let idx = sy as usize * w + sx as usize;
                let l = luma[idx];
                if best.is_none_or(|(current, _)| pick.prefers(l, current)) {
                    best = Some((l, data[idx]));
                }
            }
        }
        best.map_or(BLACK, |(_, px)| px)
    })
}

/// One erosion step: each pixel takes the color of its darkest neighbor.
///
/// `None` uses [`StructuringElement::cross`].
pub fn erode(image: &RgbImage, element: Option<&StructuringElement>) -> RgbImage {
    trace!(width = image.width(), height = image.height(), "erode");
    select(image, element.unwrap_or(&DEFAULT_ELEMENT), Extremum::Darkest)
}

/// One dilation step: each pixel takes the color of its brightest neighbor.
///
/// `None` uses [`StructuringElement::cross`].
pub fn dilate(image: &RgbImage, element: Option<&StructuringElement>) -> RgbImage {
    trace!(width = image.width(), height = image.height(), "dilate");
    select(image, element.unwrap_or(&DEFAULT_ELEMENT), Extremum::Brightest)
}

/// Applies [`erode`] `times` times in sequence.
///
/// With `times == 0` the result is a clone of `image` that shares its
/// buffer; no new pixels are allocated.
pub fn erode_n(image: &RgbImage, times: usize, element: Option<&StructuringElement>) -> RgbImage {
    debug!(times, "erode_n");
    (0..times).fold(image.clone(), |acc, _| erode(&acc, element))
}

/// Applies [`dilate`] `times` times in sequence.
///
/// With `times == 0` the result shares the input buffer.
pub fn dilate_n(image: &RgbImage, times: usize, element: Option<&StructuringElement>) -> RgbImage {
    debug!(times, "dilate_n");
    (0..times).fold(image.clone(), |acc, _| dilate(&acc, element))
}

/// Morphological opening: `times` erosions followed by `times` dilations.
///
/// Removes bright details smaller than the neighborhood.
pub fn open(image: &RgbImage, times: usize, element: Option<&StructuringElement>) -> RgbImage {
    dilate_n(&erode_n(image, times, element), times, element)
}

/// Morphological closing: `times` dilations followed by `times` erosions.
///
/// Removes dark details smaller than the neighborhood.
pub fn close(image: &RgbImage, times: usize, element: Option<&StructuringElement>) -> RgbImage {
    erode_n(&dilate_n(image, times, element), times, element)
}

/// Morphological gradient: per-channel `dilate - erode`, floored at zero.
///
/// Highlights edges and boundaries.
pub fn gradient(image: &RgbImage, element: Option<&StructuringElement>) -> RgbImage {
    let dilated = dilate(image, element);
    let eroded = erode(image, element);
    map_binary(&dilated, &eroded, |d, e| d - e)
}
