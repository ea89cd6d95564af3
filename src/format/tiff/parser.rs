//! TIFF image file directory walk.
//!
//! # Header
//!
//! ```text
//! Bytes 0-1: Byte order ("II" = little-endian, "MM" = big-endian)
//! Bytes 2-3: Version (42)
//! Bytes 4-7: Offset to first IFD (u32, relative to start of file)
//! ```
//!
//! Bytes 0-3 are consumed by detection, which also decides the byte order.
//!
//! # Directory
//!
//! ```text
//! u16             entry count
//! entry count x   u16 tag, u16 field type, 4-byte value slot
//! ```
//!
//! SHORT and SSHORT values sit in the first 2 bytes of the slot; everything
//! else is read as a full u32. The walk stops as soon as both ImageWidth (256)
//! and ImageLength (257) have been seen, so later entries are never read.

use std::io::Read;

use crate::error::ProbeError;
use crate::format::{DimensionParser, ImageFormat};
use crate::io::{ByteCursor, ByteOrder};

use super::tags::{FieldType, TiffTag};

/// Bytes consumed before the IFD can start: order mark, version, IFD offset.
pub const TIFF_HEADER_SIZE: u64 = 8;

/// Size of the value slot in a directory entry.
const VALUE_SLOT_SIZE: u64 = 4;

// =============================================================================
// DirectoryEntry
// =============================================================================

/// A single directory entry, interpreted as it is read and then dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Tag identifier
    pub tag: u16,

    /// Raw field type (see [`FieldType`])
    pub field_type: u16,

    /// Value from the slot, 2 or 4 bytes wide depending on the field type
    pub value: u32,
}

impl DirectoryEntry {
    /// Read one entry from the cursor.
    ///
    /// Consumes exactly 8 bytes on success.
    pub fn read<R: Read>(
        cursor: &mut ByteCursor<R>,
        byte_order: ByteOrder,
    ) -> Result<Self, ProbeError> {
        let tag = cursor.read_u16(byte_order)?;
        let field_type = cursor.read_u16(byte_order)?;

        let value = if FieldType::from_u16(field_type).is_some_and(FieldType::is_short_value) {
            let value = cursor.read_u16(byte_order)?;
            cursor.skip(VALUE_SLOT_SIZE - 2)?;
            u32::from(value)
        } else {
            cursor.read_u32(byte_order)?
        };

        Ok(Self {
            tag,
            field_type,
            value,
        })
    }

    /// The known tag this entry carries, if any.
    pub fn known_tag(&self) -> Option<TiffTag> {
        TiffTag::from_u16(self.tag)
    }
}

// =============================================================================
// TiffParser
// =============================================================================

/// Reads ImageWidth and ImageLength from the first IFD.
#[derive(Debug, Clone, Copy)]
pub struct TiffParser {
    byte_order: ByteOrder,
}

impl TiffParser {
    /// Create a parser for a file with the given byte order mark.
    pub const fn new(byte_order: ByteOrder) -> Self {
        Self { byte_order }
    }
}

impl DimensionParser for TiffParser {
    const FORMAT: ImageFormat = ImageFormat::Tiff;

    fn parse_dimensions<R: Read>(
        &self,
        cursor: &mut ByteCursor<R>,
    ) -> Result<(u32, u32), ProbeError> {
        let order = self.byte_order;

        let ifd_offset = cursor.read_u32(order)?;
        let gap = u64::from(ifd_offset)
            .checked_sub(TIFF_HEADER_SIZE)
            .ok_or_else(|| {
                ProbeError::unsupported(format!(
                    "TIFF IFD offset {} points inside the header",
                    ifd_offset
                ))
            })?;
        cursor.skip(gap)?;

        let entry_count = cursor.read_u16(order)?;

        let mut width = None;
        let mut height = None;

        for _ in 0..entry_count {
            let entry = DirectoryEntry::read(cursor, order)?;

            match entry.known_tag() {
                Some(TiffTag::ImageWidth) => width = Some(entry.value),
                Some(TiffTag::ImageLength) => height = Some(entry.value),
                None => {}
            }

            if let (Some(width), Some(height)) = (width, height) {
                return Ok((width, height));
            }
        }

        Err(ProbeError::unsupported(format!(
            "TIFF directory with {} entries has no {}",
            entry_count,
            match (width, height) {
                (None, None) => "ImageWidth or ImageLength",
                (Some(_), None) => "ImageLength",
                _ => "ImageWidth",
            }
        )))
    }
}

// =============================================================================
// Tests
// =============================================================================
