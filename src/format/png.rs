//! PNG IHDR dimensions.
//!
//! ```text
//! Bytes  0-7:  signature (first 3 consumed by detection)
//! Bytes  8-15: IHDR chunk length and type
//! Bytes 16-19: width  (u32 big-endian)
//! Bytes 20-23: height (u32 big-endian)
//! ```
//!
//! Only the low 16 bits of each dimension are read (bytes 18-19 and 22-23),
//! so images wider or taller than 65535 pixels report a truncated value.

use std::io::Read;

use crate::error::ProbeError;
use crate::io::{ByteCursor, ByteOrder};

use super::{DimensionParser, ImageFormat};

/// From the end of the detected prefix (offset 3) to the low half of width.
const SKIP_TO_WIDTH: u64 = 15;

/// From the end of width to the low half of height.
const SKIP_TO_HEIGHT: u64 = 2;

/// Reads the low 16 bits of the IHDR width and height.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngParser;

impl DimensionParser for PngParser {
    const FORMAT: ImageFormat = ImageFormat::Png;

    fn parse_dimensions<R: Read>(
        &self,
        cursor: &mut ByteCursor<R>,
    ) -> Result<(u32, u32), ProbeError> {
        cursor.skip(SKIP_TO_WIDTH)?;
        let width = cursor.read_u16(ByteOrder::BigEndian)?;
        cursor.skip(SKIP_TO_HEIGHT)?;
        let height = cursor.read_u16(ByteOrder::BigEndian)?;
        Ok((width.into(), height.into()))
    }
}
