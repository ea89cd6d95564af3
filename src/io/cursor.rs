use std::io::{self, ErrorKind, Read};

use crate::error::ProbeError;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) used when assembling multi-byte integers.
///
/// Header fields are stored either most-significant-byte first (PNG, JPEG,
/// "MM" TIFF) or least-significant-byte first (GIF, BMP, "II" TIFF).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Assemble up to 4 bytes into an unsigned integer using this byte order.
    ///
    /// More than 4 bytes do not fit in a `u32` and give
    /// [`ProbeError::InvalidWidth`].
    #[inline]
    pub fn assemble(self, bytes: &[u8]) -> Result<u32, ProbeError> {
        if bytes.len() > 4 {
            return Err(ProbeError::InvalidWidth(bytes.len()));
        }
        Ok(match self {
            ByteOrder::BigEndian => bytes
                .iter()
                .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)),
            ByteOrder::LittleEndian => bytes
                .iter()
                .rev()
                .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)),
        })
    }
}

// =============================================================================
// ByteCursor
// =============================================================================

/// Sequential, forward-only reader over a byte source.
///
/// The cursor owns its source for the duration of one parse and keeps track
/// of how many bytes have been consumed. There is no seeking and no rewind:
/// skipping is done by reading and discarding, so any [`Read`] works, from
/// files to network streams.
///
/// Every read either returns the requested data in full or fails with
/// [`ProbeError::EndOfInput`]. Short reads are never exposed.
#[derive(Debug)]
pub struct ByteCursor<R> {
    source: R,
    position: u64,
}

impl<R: Read> ByteCursor<R> {
    /// Wrap a byte source. The read position starts at zero.
    pub fn new(source: R) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Read a single byte.
    pub fn read_byte(&mut self) -> Result<u8, ProbeError> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Read exactly `N` bytes into a fixed-size array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ProbeError> {
        let mut buf = [0u8; N];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Read exactly `len` bytes.
    pub fn read_exact(&mut self, len: usize) -> Result<Vec<u8>, ProbeError> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Read a `num_bytes`-wide unsigned integer (1 to 4 bytes).
    ///
    /// For big-endian the first byte read is the most significant, for
    /// little-endian the first byte read is the least significant.
    pub fn read_int(&mut self, num_bytes: usize, order: ByteOrder) -> Result<u32, ProbeError> {
        if !(1..=4).contains(&num_bytes) {
            return Err(ProbeError::InvalidWidth(num_bytes));
        }

        let mut buf = [0u8; 4];
        self.fill(&mut buf[..num_bytes])?;
        order.assemble(&buf[..num_bytes])
    }

    /// Read a 2-byte unsigned integer.
    #[inline]
    pub fn read_u16(&mut self, order: ByteOrder) -> Result<u16, ProbeError> {
        let bytes = self.read_array::<2>()?;
        Ok(match order {
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
        })
    }

    /// Read a 4-byte unsigned integer.
    #[inline]
    pub fn read_u32(&mut self, order: ByteOrder) -> Result<u32, ProbeError> {
        let bytes = self.read_array::<4>()?;
        Ok(match order {
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
        })
    }

    /// Discard `count` bytes.
    ///
    /// Fails with `EndOfInput` if the source ends first; the position then
    /// reflects the bytes that were actually discarded.
    pub fn skip(&mut self, count: u64) -> Result<(), ProbeError> {
        if count == 0 {
            return Ok(());
        }

        let discarded = io::copy(&mut (&mut self.source).take(count), &mut io::sink())?;
        self.position += discarded;

        if discarded < count {
            return Err(ProbeError::EndOfInput {
                offset: self.position,
            });
        }
        Ok(())
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<(), ProbeError> {
        match self.source.read_exact(buf) {
            Ok(()) => {
                self.position += buf.len() as u64;
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(ProbeError::EndOfInput {
                offset: self.position,
            }),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
