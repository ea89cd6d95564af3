//! JPEG marker segment walk.
//!
//! JPEG has no fixed offset for the frame size. After the SOI marker
//! (`FF D8`) the stream is a sequence of segments:
//!
//! ```text
//! FF <marker> <length: u16 BE, includes itself> <length - 2 bytes payload>
//! ```
//!
//! Segments are skipped until the first Start-Of-Frame marker, whose payload
//! starts with the sample precision followed by height and width:
//!
//! ```text
//! FF C0..C2 <length> <precision: u8> <height: u16 BE> <width: u16 BE> ...
//! ```
//!
//! Only the first SOF is read. Frames further down the stream (for example
//! in an embedded thumbnail) are never reached.

use std::io::Read;

use crate::error::ProbeError;
use crate::io::{ByteCursor, ByteOrder};

use super::{DimensionParser, ImageFormat};

// =============================================================================
// Markers
// =============================================================================

/// Marker prefix byte.
pub const MARKER_PREFIX: u8 = 0xFF;

/// Start of Frame, baseline DCT.
pub const SOF0: u8 = 0xC0;

/// Start of Frame, extended sequential DCT.
pub const SOF1: u8 = 0xC1;

/// Start of Frame, progressive DCT.
pub const SOF2: u8 = 0xC2;

/// Size of the length field, counted in the segment length.
const LENGTH_FIELD_LEN: u16 = 2;

/// Sample precision byte preceding the frame dimensions.
const PRECISION_LEN: u64 = 1;

/// Whether `marker` starts a frame header this parser reads.
#[inline]
pub const fn is_start_of_frame(marker: u8) -> bool {
    matches!(marker, SOF0 | SOF1 | SOF2)
}

// =============================================================================
// JpegParser
// =============================================================================

/// Walks JPEG segments up to the first SOF marker.
#[derive(Debug, Clone, Copy)]
pub struct JpegParser {
    /// Byte following SOI, consumed during detection.
    first: u8,
}

impl JpegParser {
    /// Create a parser that resumes after the SOI marker.
    ///
    /// `first` is the byte right after `FF D8`, which detection already read.
    pub const fn new(first: u8) -> Self {
        Self { first }
    }
}

impl DimensionParser for JpegParser {
    const FORMAT: ImageFormat = ImageFormat::Jpeg;

    fn parse_dimensions<R: Read>(
        &self,
        cursor: &mut ByteCursor<R>,
    ) -> Result<(u32, u32), ProbeError> {
        let mut current = self.first;

        while current == MARKER_PREFIX {
            let marker = cursor.read_byte()?;
            let length = cursor.read_u16(ByteOrder::BigEndian)?;

            if is_start_of_frame(marker) {
                cursor.skip(PRECISION_LEN)?;
                let height = cursor.read_u16(ByteOrder::BigEndian)?;
                let width = cursor.read_u16(ByteOrder::BigEndian)?;
                return Ok((width.into(), height.into()));
            }

            let payload = length.checked_sub(LENGTH_FIELD_LEN).ok_or_else(|| {
                ProbeError::unsupported(format!(
                    "JPEG segment FF{:02X} has invalid length {}",
                    marker, length
                ))
            })?;
            cursor.skip(payload.into())?;
            current = cursor.read_byte()?;
        }

        Err(ProbeError::unsupported(format!(
            "JPEG stream has no frame header (expected marker at byte {}, found 0x{:02X})",
            cursor.position().saturating_sub(1),
            current
        )))
    }
}

// =============================================================================
// Tests
// =============================================================================
