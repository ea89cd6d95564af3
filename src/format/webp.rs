//! WebP dimensions from a simple lossy (`VP8 `) RIFF layout.
//!
//! ```text
//! Bytes  0-3:  "RIFF" (first 3 consumed by detection)
//! Bytes  4-7:  RIFF payload size
//! Bytes  8-11: "WEBP"
//! Bytes 12-15: "VP8 "
//! Bytes 16-19: chunk size
//! Bytes 20-25: frame tag and start code
//! Bytes 26-27: width  (u16 little-endian)
//! Bytes 28-29: height (u16 little-endian)
//! ```
//!
//! The 27 bytes following the detected prefix are read as one block and the
//! dimensions taken from fixed offsets within it. Lossless (`VP8L`) and
//! extended (`VP8X`) files pack their dimensions differently; they are not
//! told apart here, and the 2-bit scale field of `VP8 ` is not masked.

use std::io::Read;

use crate::error::ProbeError;
use crate::io::ByteCursor;

use super::{DimensionParser, ImageFormat};

/// Block length read after the 3-byte prefix.
const BLOCK_LEN: usize = 27;

/// Block offset of the fourth RIFF byte.
const RIFF_TAIL: usize = 0;

/// Block range of the "WEBP" form type.
const FORM_TYPE: std::ops::Range<usize> = 5..9;

const WIDTH_LO: usize = 23;
const WIDTH_HI: usize = 24;
const HEIGHT_LO: usize = 25;
const HEIGHT_HI: usize = 26;

/// Reads fixed-offset dimensions from a RIFF/WebP header block.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpParser;

impl DimensionParser for WebpParser {
    const FORMAT: ImageFormat = ImageFormat::WebP;

    fn parse_dimensions<R: Read>(
        &self,
        cursor: &mut ByteCursor<R>,
    ) -> Result<(u32, u32), ProbeError> {
        let block = cursor.read_array::<BLOCK_LEN>()?;

        if block[RIFF_TAIL] != b'F' || &block[FORM_TYPE] != b"WEBP" {
            return Err(ProbeError::unsupported("RIFF container is not WebP"));
        }

        Ok((decode_width(&block), decode_height(&block)))
    }
}

fn decode_width(block: &[u8; BLOCK_LEN]) -> u32 {
    (u32::from(block[WIDTH_HI]) << 8) | u32::from(block[WIDTH_LO])
}

fn decode_height(block: &[u8; BLOCK_LEN]) -> u32 {
    (u32::from(block[HEIGHT_HI]) << 8) | u32::from(block[HEIGHT_LO])
}
