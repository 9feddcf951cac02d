//! Morphology command

use crate::{ElementKind, MorphArgs, MorphOp};
use anyhow::Result;
use pix_ops::morphology::{close, dilate_n, erode_n, gradient, open, StructuringElement};

fn element_for(kind: ElementKind) -> StructuringElement {
    match kind {
        ElementKind::Cross => StructuringElement::cross(),
        ElementKind::Square => StructuringElement::square(),
        ElementKind::Diagonal => StructuringElement::diagonal(),
    }
}

pub fn run(args: MorphArgs, verbose: bool) -> Result<()> {
    let image = super::load_image(&args.input)?;
    let element = element_for(args.element);
    let el = Some(&element);

    if verbose {
        println!(
            "{:?} x{} with {:?} element: {}",
            args.op,
            args.times,
            args.element,
            args.input.display()
        );
    }

    let output = match args.op {
        MorphOp::Erode => erode_n(&image, args.times, el),
        MorphOp::Dilate => dilate_n(&image, args.times, el),
        MorphOp::Open => open(&image, args.times, el),
        MorphOp::Close => close(&image, args.times, el),
        MorphOp::Gradient => gradient(&image, el),
    };

    super::save_image(&args.output, &output)?;

    if verbose {
        println!("Done.");
    }

    Ok(())
}
