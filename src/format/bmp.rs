//! BMP DIB header dimensions.
//!
//! ```text
//! Bytes  0-1:  "BM" (detection also consumes byte 2)
//! Bytes  2-13: file size, reserved, pixel data offset
//! Bytes 14-17: DIB header size
//! Bytes 18-21: width  (i32 little-endian)
//! Bytes 22-25: height (i32 little-endian)
//! ```
//!
//! Only the low 16 bits of each field are read, so the same 65535 limit as
//! PNG applies. Top-down bitmaps (negative height) are not special-cased.

use std::io::Read;

use crate::error::ProbeError;
use crate::io::{ByteCursor, ByteOrder};

use super::{DimensionParser, ImageFormat};

/// From offset 3 to the width field at offset 18.
const SKIP_TO_WIDTH: u64 = 15;

/// High half of width, landing on the height field.
const SKIP_TO_HEIGHT: u64 = 2;

/// Reads the low 16 bits of the DIB width and height.
#[derive(Debug, Clone, Copy, Default)]
pub struct BmpParser;

impl DimensionParser for BmpParser {
    const FORMAT: ImageFormat = ImageFormat::Bmp;

    fn parse_dimensions<R: Read>(
        &self,
        cursor: &mut ByteCursor<R>,
    ) -> Result<(u32, u32), ProbeError> {
        cursor.skip(SKIP_TO_WIDTH)?;
        let width = cursor.read_u16(ByteOrder::LittleEndian)?;
        cursor.skip(SKIP_TO_HEIGHT)?;
        let height = cursor.read_u16(ByteOrder::LittleEndian)?;
        Ok((width.into(), height.into()))
    }
}
