//! Blend command

use crate::BlendArgs;
use anyhow::Result;
use pix_ops::adjust::blend;

pub fn run(args: BlendArgs, verbose: bool) -> Result<()> {
    let a = super::load_image(&args.a)?;
    let b = super::load_image(&args.b)?;

    if a.dimensions() != b.dimensions() {
        tracing::warn!(
            a = ?a.dimensions(),
            b = ?b.dimensions(),
            "Input sizes differ, output covers the overlap only"
        );
    }

    if verbose {
        println!(
            "Blending {} and {} ({})",
            args.a.display(),
            args.b.display(),
            args.mode
        );
    }

    let output = blend(&a, &b, args.mode);
    super::save_image(&args.output, &output)?;

    if verbose {
        println!("Done: {}x{}", output.width(), output.height());
    }

    Ok(())
}
