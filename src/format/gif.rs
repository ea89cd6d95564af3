//! GIF logical screen descriptor.
//!
//! ```text
//! Bytes 0-2: "GIF"           (consumed by detection)
//! Bytes 3-5: version ("87a" / "89a")
//! Bytes 6-7: width  (u16 little-endian)
//! Bytes 8-9: height (u16 little-endian)
//! ```

use std::io::Read;

use crate::error::ProbeError;
use crate::io::{ByteCursor, ByteOrder};

use super::{DimensionParser, ImageFormat};

/// Length of the version field following the signature.
const VERSION_LEN: u64 = 3;

/// Reads the canvas size from a GIF header.
#[derive(Debug, Clone, Copy, Default)]
pub struct GifParser;

impl DimensionParser for GifParser {
    const FORMAT: ImageFormat = ImageFormat::Gif;

    fn parse_dimensions<R: Read>(
        &self,
        cursor: &mut ByteCursor<R>,
    ) -> Result<(u32, u32), ProbeError> {
        cursor.skip(VERSION_LEN)?;
        let width = cursor.read_u16(ByteOrder::LittleEndian)?;
        let height = cursor.read_u16(ByteOrder::LittleEndian)?;
        Ok((width.into(), height.into()))
    }
}
