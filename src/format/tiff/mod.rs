//! TIFF dimension parser.
//!
//! # Key Concepts
//!
//! - **Byte order**: TIFF files declare their endianness (II = little-endian, MM = big-endian)
//!   in the first two bytes. All multi-byte values must be read respecting this order.
//!
//! - **IFD (Image File Directory)**: A table of tagged entries. The first IFD
//!   describes the main image and carries ImageWidth (256) and ImageLength (257).
//!
//! Only the first IFD is read, and only up to the entry that completes both
//! dimensions.

mod parser;
mod tags;

pub use parser::{DirectoryEntry, TiffParser, TIFF_HEADER_SIZE};
pub use tags::{FieldType, TiffTag};
