//! PNG format support.
//!
//! Decoding accepts every PNG the `png` crate understands: palette and
//! low-bit images are expanded and 16-bit samples are stripped to 8 bits
//! before conversion. Gray is replicated into all three channels and alpha
//! is dropped. Encoding always writes 8-bit RGB.
//!
//! # Example
//!
//! ```rust,ignore
//! use pix_io::png::{read, write};
//!
//! let image = read("input.png")?;
//! write("output.png", &image)?;
//! ```

use crate::{IoError, IoResult};
use pix_core::{pack_rgb, unpack_rgb, RgbImage};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Seek, Write};
use std::path::Path;
use tracing::trace;

/// Reads a PNG file from the given path.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let file = File::open(path.as_ref())?;
    decode(BufReader::new(file))
}

/// Writes an image to a PNG file.
pub fn write<P: AsRef<Path>>(path: P, image: &RgbImage) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer, image)?;
    writer.flush()?;
    Ok(())
}

/// Decodes a PNG stream.
pub fn decode<R: BufRead + Seek>(reader: R) -> IoResult<RgbImage> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    trace!(width = info.width, height = info.height, color = ?info.color_type, "png decode");

    if info.bit_depth != png::BitDepth::Eight {
        return Err(IoError::UnsupportedBitDepth(format!(
            "{:?} {:?}",
            info.color_type, info.bit_depth
        )));
    }

    let bytes = &buf[..info.buffer_size()];
    let pixels: Vec<u32> = match info.color_type {
        png::ColorType::Rgb => bytes.chunks_exact(3).map(|p| pack_rgb(p[0], p[1], p[2])).collect(),
        png::ColorType::Rgba => bytes.chunks_exact(4).map(|p| pack_rgb(p[0], p[1], p[2])).collect(),
        png::ColorType::Grayscale => bytes.iter().map(|&g| pack_rgb(g, g, g)).collect(),
        png::ColorType::GrayscaleAlpha => bytes.chunks_exact(2).map(|p| pack_rgb(p[0], p[0], p[0])).collect(),
        color_type => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, info.bit_depth
            )));
        }
    };

    Ok(RgbImage::from_data(info.width, info.height, pixels)?)
}

/// Encodes an image as 8-bit RGB PNG.
pub fn encode<W: Write>(writer: W, image: &RgbImage) -> IoResult<()> {
    trace!(width = image.width(), height = image.height(), "png encode");
    if image.is_empty() {
        return Err(IoError::EncodeError(format!(
            "cannot encode {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    let rgb: Vec<u8> = image.data().iter().flat_map(|&px| unpack_rgb(px)).collect();

    png_writer
        .write_image_data(&rgb)
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    Ok(())
}
