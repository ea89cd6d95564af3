//! End-to-end probe tests over synthetic headers.
//!
//! Tests verify:
//! - Every format recovers the dimensions placed at its documented offsets
//! - Truncation at any read point is reported as end of input
//! - Unknown prefixes are rejected
//! - Probing reads exactly what the header layout requires

use std::io::Cursor;

use fast_image_info::{probe, probe_bytes, ImageFormat, ImageInfo, ProbeError};

use super::test_utils::{
    bmp_header, consumed, gif_header, jpeg_header, png_header, tiff_header, webp_header,
    CountingReader, Endian, TrickleReader,
};

fn all_headers() -> Vec<(ImageFormat, Vec<u8>, (u32, u32))> {
    vec![
        (ImageFormat::Gif, gif_header(321, 123), (321, 123)),
        (ImageFormat::Jpeg, jpeg_header(1024, 683), (1024, 683)),
        (ImageFormat::Png, png_header(4000, 3000), (4000, 3000)),
        (ImageFormat::Bmp, bmp_header(640, 480), (640, 480)),
        (ImageFormat::WebP, webp_header(550, 368), (550, 368)),
        (
            ImageFormat::Tiff,
            tiff_header(Endian::Little, &[(256, 3, 2048), (257, 3, 1536)]),
            (2048, 1536),
        ),
    ]
}

// =============================================================================
// Per-format recovery
// =============================================================================

#[test]
fn test_every_format_recovers_dimensions() {
    for (format, bytes, dims) in all_headers() {
        let info = probe_bytes(bytes).unwrap_or_else(|e| panic!("{:?}: {}", format, e));
        assert_eq!(info.format(), format);
        assert_eq!(info.dimensions(), dims, "{:?}", format);
    }
}

#[test]
fn test_gif_little_endian_fields() {
    let bytes = [b'G', b'I', b'F', b'8', b'9', b'a', 0x34, 0x12, 0x78, 0x56];
    let info = probe(&bytes[..]).unwrap();
    assert_eq!(info.dimensions(), (0x1234, 0x5678));
    assert_eq!(info.mime_type(), "image/gif");
}

#[test]
fn test_jpeg_skips_app_segment() {
    let info = probe_bytes(jpeg_header(800, 600)).unwrap();
    assert_eq!(info.format(), ImageFormat::Jpeg);
    assert_eq!(info.dimensions(), (800, 600));
}

#[test]
fn test_jpeg_without_frame_header() {
    // APP0 followed by a byte that is not a marker prefix
    let mut bytes = jpeg_header(1, 1);
    bytes.truncate(2 + 20);
    bytes.push(0x00);
    assert!(matches!(
        probe_bytes(bytes),
        Err(ProbeError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_png_large_dimensions_keep_low_16_bits() {
    let info = probe_bytes(png_header(65_537, 131_072 + 300)).unwrap();
    assert_eq!(info.dimensions(), (1, 300));
}

#[test]
fn test_png_dimension_of_exactly_65536_is_rejected() {
    // low 16 bits are zero, which never makes a valid result
    assert!(matches!(
        probe_bytes(png_header(65_536, 10)),
        Err(ProbeError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_tiff_big_endian_long_values() {
    let bytes = tiff_header(Endian::Big, &[(256, 4, 80_000), (257, 4, 60_000)]);
    let info = probe_bytes(bytes).unwrap();
    assert_eq!(info.format(), ImageFormat::Tiff);
    assert_eq!(info.dimensions(), (80_000, 60_000));
}

#[test]
fn test_tiff_stops_after_third_entry() {
    let mut bytes = tiff_header(
        Endian::Little,
        &[(259, 3, 1), (256, 3, 300), (257, 3, 200)],
    );
    // claim a fourth entry that is not there
    bytes[8] = 4;

    let (reader, counter) = CountingReader::new(Cursor::new(bytes.clone()));
    let info = probe(reader).unwrap();
    assert_eq!(info.dimensions(), (300, 200));
    assert_eq!(consumed(&counter), bytes.len());
}

#[test]
fn test_tiff_without_dimension_tags() {
    let bytes = tiff_header(Endian::Big, &[(259, 3, 1), (262, 3, 2)]);
    assert!(matches!(
        probe_bytes(bytes),
        Err(ProbeError::UnsupportedFormat { .. })
    ));
}

// =============================================================================
// Truncation
// =============================================================================

#[test]
fn test_truncation_at_every_read_point_is_end_of_input() {
    for (format, bytes, _) in all_headers() {
        let needed = {
            let (reader, counter) = CountingReader::new(Cursor::new(bytes.clone()));
            probe(reader).unwrap();
            consumed(&counter)
        };

        for len in 0..needed {
            match probe(&bytes[..len]) {
                Err(ProbeError::EndOfInput { .. }) => {}
                other => panic!("{:?} truncated to {} bytes gave {:?}", format, len, other),
            }
        }
    }
}

/// Bytes each header layout needs, through the last dimension field read.
fn header_lengths() -> Vec<(ImageFormat, Vec<u8>, usize)> {
    vec![
        (ImageFormat::Gif, gif_header(321, 123), 10),
        (ImageFormat::Jpeg, jpeg_header(1024, 683), 31),
        (ImageFormat::Png, png_header(4000, 3000), 24),
        (ImageFormat::Bmp, bmp_header(640, 480), 24),
        (ImageFormat::WebP, webp_header(550, 368), 30),
        (
            ImageFormat::Tiff,
            tiff_header(Endian::Little, &[(256, 3, 2048), (257, 3, 1536)]),
            26,
        ),
    ]
}

#[test]
fn test_reads_exactly_the_header_layout() {
    for (format, mut bytes, expected) in header_lengths() {
        // trailing data must stay unread
        bytes.extend_from_slice(&[0xEE; 64]);

        let (reader, counter) = CountingReader::new(Cursor::new(bytes));
        let info = probe(reader).unwrap_or_else(|e| panic!("{:?}: {}", format, e));
        assert_eq!(info.format(), format);
        assert_eq!(consumed(&counter), expected, "{:?}", format);
    }
}

#[test]
fn test_tiff_consumes_whole_synthetic_stream() {
    let bytes = tiff_header(Endian::Big, &[(256, 3, 2048), (257, 3, 1536)]);
    let (reader, counter) = CountingReader::new(Cursor::new(bytes.clone()));
    probe(reader).unwrap();
    assert_eq!(consumed(&counter), bytes.len());
}

// =============================================================================
// Unsupported input
// =============================================================================

#[test]
fn test_zero_prefix_is_unsupported() {
    assert!(matches!(
        probe_bytes(vec![0u8; 3]),
        Err(ProbeError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        probe_bytes(vec![0u8; 64]),
        Err(ProbeError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_text_is_unsupported() {
    assert!(matches!(
        probe_bytes(b"hello world".to_vec()),
        Err(ProbeError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_riff_wave_is_unsupported() {
    let mut bytes = webp_header(1, 1);
    bytes[8..12].copy_from_slice(b"WAVE");
    assert!(matches!(
        probe_bytes(bytes),
        Err(ProbeError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_empty_input_is_end_of_input() {
    assert!(probe_bytes(Vec::new()).unwrap_err().is_end_of_input());
}

// =============================================================================
// Sources
// =============================================================================

#[test]
fn test_one_byte_at_a_time_source() {
    for (format, bytes, dims) in all_headers() {
        let info = probe(TrickleReader::new(&bytes[..])).unwrap();
        assert_eq!(info.format(), format);
        assert_eq!(info.dimensions(), dims);
    }
}

#[test]
fn test_probing_twice_is_identical() {
    for (_, bytes, _) in all_headers() {
        let first = probe(&bytes[..]);
        let second = probe(&bytes[..]);
        assert_eq!(first, second);
    }
}

#[test]
fn test_constructors_agree() {
    let bytes = png_header(12, 34);
    let a = ImageInfo::from_bytes(bytes.clone()).unwrap();
    let b = ImageInfo::from_reader(Cursor::new(bytes)).unwrap();
    assert_eq!(a, b);
}
