use thiserror::Error;

/// Errors that can occur while probing an image header.
///
/// Every variant is terminal for the call that produced it. Callers iterating
/// over many files decide per item whether to continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The source ran out before a required field could be read
    #[error("Unexpected end of input at byte offset {offset}")]
    EndOfInput { offset: u64 },

    /// The prefix matched no known signature, or the header did not yield both dimensions
    #[error("Unsupported format: {reason}")]
    UnsupportedFormat { reason: String },

    /// The underlying reader failed for a reason other than end of input
    #[error("I/O error: {0}")]
    Io(String),

    /// Integer reads are limited to 1..=4 bytes
    #[error("Invalid integer width: {0} bytes (expected 1 to 4)")]
    InvalidWidth(usize),
}

impl ProbeError {
    /// Shorthand for building an [`ProbeError::UnsupportedFormat`].
    pub fn unsupported(reason: impl Into<String>) -> Self {
        ProbeError::UnsupportedFormat {
            reason: reason.into(),
        }
    }

    /// Whether this error means the source was truncated.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ProbeError::EndOfInput { .. })
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        ProbeError::Io(err.to_string())
    }
}
