//! The probe result.

use std::fmt;
use std::io::{BufReader, Read};
use std::path::Path;

use bytes::{Buf, Bytes};
use serde::Serialize;

use crate::error::ProbeError;
use crate::format::{detect_and_parse, ImageFormat};
use crate::io::ByteCursor;

/// Format and pixel dimensions of an image, read from its header.
///
/// Both dimensions are resolved and non-zero; an `ImageInfo` is never
/// partially filled. The value is immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ImageInfo {
    format: ImageFormat,
    width: u32,
    height: u32,
}

impl ImageInfo {
    /// Build a result from resolved dimensions.
    ///
    /// # Errors
    /// `UnsupportedFormat` if either dimension is zero.
    pub fn new(format: ImageFormat, width: u32, height: u32) -> Result<Self, ProbeError> {
        if width == 0 || height == 0 {
            return Err(ProbeError::unsupported(format!(
                "{} header declares a zero dimension ({}x{})",
                format.name(),
                width,
                height
            )));
        }

        Ok(Self {
            format,
            width,
            height,
        })
    }

    /// Probe any sequential byte source.
    pub fn from_reader<R: Read>(source: R) -> Result<Self, ProbeError> {
        probe(source)
    }

    /// Probe an in-memory buffer.
    pub fn from_bytes(bytes: impl Into<Bytes>) -> Result<Self, ProbeError> {
        probe_bytes(bytes)
    }

    /// Probe a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProbeError> {
        probe_path(path)
    }

    /// Detected encoding family.
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` pair.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// MIME type of the detected format.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

impl fmt::Display for ImageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MIME Type : {}\t Width : {}\t Height : {}",
            self.mime_type(),
            self.width,
            self.height
        )
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Determine the format and dimensions of the image in `source`.
///
/// Only the leading header bytes are consumed; pixel data is never read.
/// The source is owned for the duration of the call and dropped on return.
///
/// # Errors
/// * `EndOfInput` - the source ended before a required field
/// * `UnsupportedFormat` - no known signature, or dimensions not found
/// * `Io` - the source failed for another reason
pub fn probe<R: Read>(source: R) -> Result<ImageInfo, ProbeError> {
    let mut cursor = ByteCursor::new(source);
    detect_and_parse(&mut cursor)
}

/// Probe an in-memory buffer.
pub fn probe_bytes(bytes: impl Into<Bytes>) -> Result<ImageInfo, ProbeError> {
    probe(bytes.into().reader())
}

/// Probe a file on disk.
///
/// # Errors
/// `Io` if the file cannot be opened, otherwise as [`probe`].
pub fn probe_path(path: impl AsRef<Path>) -> Result<ImageInfo, ProbeError> {
    let file = std::fs::File::open(path.as_ref())?;
    probe(BufReader::new(file))
}
