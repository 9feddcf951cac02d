//! CLI command implementations

pub mod adjust;
pub mod blend;
pub mod convolve;
pub mod histogram;
pub mod info;
pub mod morph;

use anyhow::{Context, Result};
use pix_core::RgbImage;
use std::path::Path;

/// Load image from path
pub fn load_image(path: &Path) -> Result<RgbImage> {
    pix_io::read(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save image to path
pub fn save_image(path: &Path, image: &RgbImage) -> Result<()> {
    pix_io::write(path, image).with_context(|| format!("Failed to save: {}", path.display()))
}
