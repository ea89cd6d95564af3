//! I/O layer: a forward-only cursor over any [`std::io::Read`] source.

mod cursor;

pub use cursor::{ByteCursor, ByteOrder};
