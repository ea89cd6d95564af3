//! Format detection for image byte streams.
//!
//! This module identifies the container format by examining the leading
//! magic bytes and dispatches to the matching dimension parser. Supported:
//!
//! - **GIF**: `GIF`
//! - **JPEG**: `FF D8`
//! - **PNG**: `89 50 4E`
//! - **BMP**: `BM`
//! - **WebP**: `RIF` (RIFF container, confirmed by the WebP parser)
//! - **TIFF**: `MM 00 2A` or `II 2A 00`
//!
//! Anything else is reported as [`ProbeError::UnsupportedFormat`].

use std::io::Read;

use serde::Serialize;

use crate::error::ProbeError;
use crate::info::ImageInfo;
use crate::io::{ByteCursor, ByteOrder};

use super::{
    BmpParser, DimensionParser, GifParser, JpegParser, PngParser, TiffParser, WebpParser,
};

// =============================================================================
// ImageFormat
// =============================================================================

/// Encoding family of a probed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Graphics Interchange Format
    Gif,
    /// JPEG / JFIF / Exif
    Jpeg,
    /// Portable Network Graphics
    Png,
    /// Windows bitmap
    Bmp,
    /// WebP in a RIFF container
    WebP,
    /// Tagged Image File Format
    Tiff,
}

impl ImageFormat {
    /// All supported formats, in detection order.
    pub const ALL: [ImageFormat; 6] = [
        ImageFormat::Gif,
        ImageFormat::Jpeg,
        ImageFormat::Png,
        ImageFormat::Bmp,
        ImageFormat::WebP,
        ImageFormat::Tiff,
    ];

    /// Get a human-readable name for the format.
    pub const fn name(&self) -> &'static str {
        match self {
            ImageFormat::Gif => "GIF",
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
            ImageFormat::Bmp => "BMP",
            ImageFormat::WebP => "WebP",
            ImageFormat::Tiff => "TIFF",
        }
    }

    /// Get the MIME type for the format.
    pub const fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Gif => "image/gif",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Tiff => "image/tiff",
        }
    }

    /// File extensions commonly used for the format (lowercase, no dot).
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            ImageFormat::Gif => &["gif"],
            ImageFormat::Jpeg => &["jpg", "jpeg", "jpe", "jfif"],
            ImageFormat::Png => &["png"],
            ImageFormat::Bmp => &["bmp", "dib"],
            ImageFormat::WebP => &["webp"],
            ImageFormat::Tiff => &["tif", "tiff"],
        }
    }

    /// Look up a format by file extension (case-insensitive, leading dot allowed).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }
}

// =============================================================================
// Signature
// =============================================================================

/// TIFF magic number (42) following the byte order mark.
const TIFF_MAGIC: u8 = 0x2A;

/// A matched leading signature, carrying what the parser needs from the
/// bytes the detector already consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    Gif,
    /// `next` is the third byte, which starts the first marker after SOI
    Jpeg { next: u8 },
    Png,
    Bmp,
    WebP,
    Tiff(ByteOrder),
}

impl Signature {
    /// The format this signature identifies.
    pub const fn format(&self) -> ImageFormat {
        match self {
            Signature::Gif => ImageFormat::Gif,
            Signature::Jpeg { .. } => ImageFormat::Jpeg,
            Signature::Png => ImageFormat::Png,
            Signature::Bmp => ImageFormat::Bmp,
            Signature::WebP => ImageFormat::WebP,
            Signature::Tiff(_) => ImageFormat::Tiff,
        }
    }
}

/// Read the signature prefix and identify the format.
///
/// Three bytes are always consumed. A fourth is read only when the first
/// three could begin a TIFF byte order mark. Signatures are checked in a
/// fixed order and the first match wins.
///
/// # Errors
/// * `EndOfInput` - fewer bytes than the prefix requires
/// * `UnsupportedFormat` - no signature matched
pub fn detect<R: Read>(cursor: &mut ByteCursor<R>) -> Result<Signature, ProbeError> {
    let [c1, c2, c3] = cursor.read_array::<3>()?;

    let signature = match [c1, c2, c3] {
        [b'G', b'I', b'F'] => Signature::Gif,
        [0xFF, 0xD8, next] => Signature::Jpeg { next },
        [0x89, b'P', b'N'] => Signature::Png,
        [b'B', b'M', _] => Signature::Bmp,
        [b'R', b'I', b'F'] => Signature::WebP,
        [b'M', b'M', 0x00] => match cursor.read_byte()? {
            TIFF_MAGIC => Signature::Tiff(ByteOrder::BigEndian),
            c4 => return Err(unrecognized(&[c1, c2, c3, c4])),
        },
        [b'I', b'I', TIFF_MAGIC] => match cursor.read_byte()? {
            0x00 => Signature::Tiff(ByteOrder::LittleEndian),
            c4 => return Err(unrecognized(&[c1, c2, c3, c4])),
        },
        prefix => return Err(unrecognized(&prefix)),
    };

    Ok(signature)
}

fn unrecognized(prefix: &[u8]) -> ProbeError {
    let hex: Vec<String> = prefix.iter().map(|b| format!("{:02X}", b)).collect();
    ProbeError::unsupported(format!("unrecognized signature {}", hex.join(" ")))
}

/// Detect the format and run the matching parser.
pub(crate) fn detect_and_parse<R: Read>(
    cursor: &mut ByteCursor<R>,
) -> Result<ImageInfo, ProbeError> {
    match detect(cursor)? {
        Signature::Gif => parse_with(&GifParser, cursor),
        Signature::Jpeg { next } => parse_with(&JpegParser::new(next), cursor),
        Signature::Png => parse_with(&PngParser, cursor),
        Signature::Bmp => parse_with(&BmpParser, cursor),
        Signature::WebP => parse_with(&WebpParser, cursor),
        Signature::Tiff(byte_order) => parse_with(&TiffParser::new(byte_order), cursor),
    }
}

fn parse_with<P: DimensionParser, R: Read>(
    parser: &P,
    cursor: &mut ByteCursor<R>,
) -> Result<ImageInfo, ProbeError> {
    let (width, height) = parser.parse_dimensions(cursor)?;
    ImageInfo::new(P::FORMAT, width, height)
}

// =============================================================================
// Tests
// =============================================================================
