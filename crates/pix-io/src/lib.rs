//! # pix-io
//!
//! Reading and writing [`RgbImage`] buffers.
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | Yes  | Yes   | `png`   |
//!
//! Decoding drops alpha and replicates gray; encoding writes 8-bit RGB, so
//! every 24-bit image survives a write/read cycle unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use pix_io::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod detect;
mod error;

#[cfg(feature = "png")]
pub mod png;

pub use detect::Format;
pub use error::{IoError, IoResult};

use pix_core::RgbImage;
use std::io::{BufRead, Seek, Write};
use std::path::Path;
use tracing::debug;

fn unsupported(path: &Path) -> IoError {
    IoError::UnsupportedFormat(
        path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("unknown")
            .to_string(),
    )
}

/// Reads an image, detecting the format from content or extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unknown files and formats
/// whose feature is disabled.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let path = path.as_ref();
    let format = Format::detect(path)?;
    debug!(path = %path.display(), ?format, "Reading image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::read(path),
        _ => Err(unsupported(path)),
    }
}

/// Writes an image in the format named by the path's extension.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbImage) -> IoResult<()> {
    let path = path.as_ref();
    let format = Format::from_extension(path);
    debug!(path = %path.display(), ?format, "Writing image");

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::write(path, image),
        _ => Err(unsupported(path)),
    }
}

/// Decodes an image from a stream in the given format.
pub fn decode<R: BufRead + Seek>(reader: R, format: Format) -> IoResult<RgbImage> {
    match format {
        #[cfg(feature = "png")]
        Format::Png => png::decode(reader),
        _ => {
            let _ = reader;
            Err(IoError::UnsupportedFormat(format!("{:?}", format)))
        }
    }
}

/// Encodes an image into a stream in the given format.
pub fn encode<W: Write>(writer: W, image: &RgbImage, format: Format) -> IoResult<()> {
    match format {
        #[cfg(feature = "png")]
        Format::Png => png::encode(writer, image),
        _ => {
            let _ = (writer, image);
            Err(IoError::UnsupportedFormat(format!("{:?}", format)))
        }
    }
}
