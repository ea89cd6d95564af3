//! TIFF tag and field type definitions.
//!
//! Only the vocabulary needed to find the image dimensions is defined here.
//! Every other tag is read past and ignored.

// =============================================================================
// TIFF Field Types
// =============================================================================

/// TIFF field types that determine how a directory value is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer
    Byte = 1,

    /// 8-bit ASCII character
    Ascii = 2,

    /// Unsigned 16-bit integer
    Short = 3,

    /// Unsigned 32-bit integer
    Long = 4,

    /// Two LONGs: numerator and denominator
    Rational = 5,

    /// Signed 8-bit integer
    SByte = 6,

    /// Undefined byte data
    Undefined = 7,

    /// Signed 16-bit integer
    SShort = 8,

    /// Signed 32-bit integer
    SLong = 9,
}

impl FieldType {
    /// Create a FieldType from its numeric value.
    ///
    /// Returns `None` for unknown type values. Unknown types are not an
    /// error; their value slot is read as a full 4-byte value.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(FieldType::Byte),
            2 => Some(FieldType::Ascii),
            3 => Some(FieldType::Short),
            4 => Some(FieldType::Long),
            5 => Some(FieldType::Rational),
            6 => Some(FieldType::SByte),
            7 => Some(FieldType::Undefined),
            8 => Some(FieldType::SShort),
            9 => Some(FieldType::SLong),
            _ => None,
        }
    }

    /// Whether the value occupies only the first 2 bytes of the 4-byte slot.
    #[inline]
    pub const fn is_short_value(self) -> bool {
        matches!(self, FieldType::Short | FieldType::SShort)
    }
}

// =============================================================================
// TIFF Tags
// =============================================================================

/// TIFF tag IDs that carry the image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TiffTag {
    /// Image width in pixels
    ImageWidth = 256,

    /// Image height (length) in pixels
    ImageLength = 257,
}

impl TiffTag {
    /// Create a TiffTag from its numeric value.
    ///
    /// Returns `None` for unrecognized tags, which are simply skipped.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            256 => Some(TiffTag::ImageWidth),
            257 => Some(TiffTag::ImageLength),
            _ => None,
        }
    }

    /// Get the numeric tag ID.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

// =============================================================================
// Tests
// =============================================================================
