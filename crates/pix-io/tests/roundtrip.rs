//! File-level codec tests.

use pix_core::{pack_rgb, RgbImage};
use pix_io::{decode, encode, read, write, Format, IoError};
use std::io::Cursor;
use tempfile::TempDir;

fn test_image() -> RgbImage {
    RgbImage::from_fn(37, 21, |x, y| {
        pack_rgb((x * 7) as u8, (y * 12) as u8, ((x ^ y) * 5) as u8)
    })
}

#[test]
fn png_file_roundtrip_is_lossless() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roundtrip.png");

    let image = test_image();
    write(&path, &image).unwrap();
    assert_eq!(Format::detect(&path).unwrap(), Format::Png);

    let loaded = read(&path).unwrap();
    assert_eq!(loaded, image);
}

#[test]
fn detects_png_content_without_extension() {
    let dir = TempDir::new().unwrap();
    let named = dir.path().join("a.png");
    write(&named, &test_image()).unwrap();

    let bare = dir.path().join("no_extension");
    std::fs::copy(&named, &bare).unwrap();
    assert_eq!(read(&bare).unwrap(), test_image());
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.bmp");
    let err = write(&path, &test_image()).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(ref ext) if ext == "bmp"));
    assert!(!path.exists());
}

#[test]
fn missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read(dir.path().join("absent.png")).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
}

#[test]
fn stream_roundtrip() {
    let image = RgbImage::filled(3, 5, 0x7F80FF);
    let mut bytes = Vec::new();
    encode(&mut bytes, &image, Format::Png).unwrap();
    assert_eq!(Format::from_bytes(&bytes), Format::Png);
    assert_eq!(decode(Cursor::new(bytes), Format::Png).unwrap(), image);

    assert!(encode(Vec::new(), &image, Format::Unknown).is_err());
}
