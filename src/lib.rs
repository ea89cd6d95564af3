//! # fast-image-info
//!
//! Header-only image introspection: the encoding family and pixel
//! dimensions of an image, read from the first few bytes of its container.
//!
//! Pixel data is never decoded. The source is consumed strictly forward, so
//! files, in-memory buffers and network streams all work without seeking.
//!
//! ## Supported formats
//!
//! | Format | Signature | Dimensions from |
//! |--------|-----------|-----------------|
//! | GIF    | `GIF`     | logical screen descriptor |
//! | JPEG   | `FF D8`   | first SOF0/SOF1/SOF2 segment |
//! | PNG    | `89 50 4E`| IHDR (low 16 bits) |
//! | BMP    | `BM`      | DIB header (low 16 bits) |
//! | WebP   | `RIFF`    | fixed offsets of the `VP8 ` frame header |
//! | TIFF   | `MM`/`II` + 42 | ImageWidth/ImageLength in the first IFD |
//!
//! ## Architecture
//!
//! - [`io`] - forward-only [`ByteCursor`] over any [`std::io::Read`]
//! - [`mod@format`] - signature detection and one parser per format
//! - [`info`] - the [`ImageInfo`] result and the probe entry points
//! - [`batch`] - parallel probing of many files
//! - [`config`] - CLI configuration types
//!
//! ## Example
//!
//! ```rust
//! use fast_image_info::{probe_bytes, ImageFormat};
//!
//! let gif = b"GIF89a\x40\x01\xF0\x00".to_vec();
//! let info = probe_bytes(gif).unwrap();
//!
//! assert_eq!(info.format(), ImageFormat::Gif);
//! assert_eq!(info.dimensions(), (320, 240));
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod format;
pub mod info;
pub mod io;

// Re-export commonly used types
pub use batch::{
    collect_files, probe_files, scan_directory, BatchSummary, ProbeOutcome, ScanOptions,
    DEFAULT_CONCURRENCY,
};
pub use config::{Cli, Command, OutputFormat, ProbeConfig, ScanConfig};
pub use error::ProbeError;
pub use format::tiff::{DirectoryEntry, FieldType, TiffTag};
pub use format::{detect, DimensionParser, ImageFormat, Signature};
pub use info::{probe, probe_bytes, probe_path, ImageInfo};
pub use io::{ByteCursor, ByteOrder};
