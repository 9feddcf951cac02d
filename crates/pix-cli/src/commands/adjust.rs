//! Pointwise adjustment command
//!
//! Adjustments run in a fixed order: grayscale, invert, brightness,
//! saturation, hue shift, equalize, threshold.

use crate::AdjustArgs;
use anyhow::{bail, Result};
use pix_core::RgbImage;
use pix_ops::adjust::{brightness, grayscale, hue_shift, invert, saturate, threshold};
use pix_ops::histogram::equalize_value;
use pix_ops::mapper::{map_unary, map_unary_hsv};
use tracing::debug;

/// Applies the requested adjustments in order.
pub fn apply(image: RgbImage, args: &AdjustArgs) -> RgbImage {
    let mut image = image;
    if args.grayscale {
        debug!("grayscale");
        image = map_unary(&image, grayscale);
    }
    if args.invert {
        debug!("invert");
        image = map_unary(&image, invert);
    }
    if let Some(k) = args.brightness {
        debug!(k, "brightness");
        image = map_unary(&image, brightness(k));
    }
    if let Some(k) = args.saturation {
        debug!(k, "saturation");
        image = map_unary_hsv(&image, saturate(k));
    }
    if let Some(d) = args.hue_shift {
        debug!(d, "hue shift");
        image = map_unary_hsv(&image, hue_shift(d));
    }
    if args.equalize {
        debug!("equalize");
        image = equalize_value(&image);
    }
    if let Some(t) = args.threshold {
        debug!(t, "threshold");
        image = map_unary(&image, threshold(t));
    }
    image
}

fn any_requested(args: &AdjustArgs) -> bool {
    args.grayscale
        || args.invert
        || args.equalize
        || args.brightness.is_some()
        || args.saturation.is_some()
        || args.hue_shift.is_some()
        || args.threshold.is_some()
}

pub fn run(args: AdjustArgs, verbose: bool) -> Result<()> {
    if !any_requested(&args) {
        bail!("No adjustment requested (see `pix adjust --help`)");
    }

    let image = super::load_image(&args.input)?;

    if verbose {
        println!("Adjusting {}", args.input.display());
    }

    let output = apply(image, &args);
    super::save_image(&args.output, &output)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> AdjustArgs {
        AdjustArgs {
            input: PathBuf::from("in.png"),
            output: PathBuf::from("out.png"),
            grayscale: false,
            invert: false,
            brightness: None,
            saturation: None,
            hue_shift: None,
            threshold: None,
            equalize: false,
        }
    }

    #[test]
    fn test_nothing_requested() {
        assert!(!any_requested(&args()));
    }

    #[test]
    fn test_grayscale_then_invert() {
        let mut a = args();
        a.grayscale = true;
        a.invert = true;
        let out = apply(RgbImage::filled(2, 2, 0xFF0000), &a);
        // luma of red is 76, inverted 179
        assert_eq!(out.pixel(0, 0), 0xB3B3B3);
    }

    #[test]
    fn test_threshold_runs_last() {
        let mut a = args();
        a.brightness = Some(0.1);
        a.threshold = Some(0.05);
        let out = apply(RgbImage::filled(1, 1, 0xFFFFFF), &a);
        assert_eq!(out.pixel(0, 0), 0xFFFFFF);
    }
}
