//! Header parsers for the supported image formats.
//!
//! Each format lives in its own module and implements [`DimensionParser`].
//! Parsers pick up where [`detect::detect`] left off: the signature bytes are
//! already consumed and the cursor sits right after them.
//!
//! # Format Detection
//!
//! Use [`detect::detect`] to identify the format of a byte stream, or
//! [`crate::probe`] to detect and parse in one step.

pub mod bmp;
pub mod detect;
pub mod gif;
pub mod jpeg;
pub mod png;
pub mod tiff;
pub mod webp;

use std::io::Read;

use crate::error::ProbeError;
use crate::io::ByteCursor;

pub use bmp::BmpParser;
pub use detect::{detect, ImageFormat, Signature};
pub use gif::GifParser;
pub use jpeg::JpegParser;
pub use png::PngParser;
pub use tiff::TiffParser;
pub use webp::WebpParser;

pub(crate) use detect::detect_and_parse;

/// Extracts `(width, height)` from a format's header.
///
/// Implementations consume exactly as many bytes as their layout requires
/// and must resolve both dimensions or fail.
pub trait DimensionParser {
    /// The format this parser understands.
    const FORMAT: ImageFormat;

    /// Read the dimensions, starting right after the signature prefix.
    fn parse_dimensions<R: Read>(
        &self,
        cursor: &mut ByteCursor<R>,
    ) -> Result<(u32, u32), ProbeError>;
}
