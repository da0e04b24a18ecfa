//! Error types for the representation engine and its inputs.
//!
//! Every fallible operation in the library returns one of these. The UI turns
//! them into displayed state; none of them is fatal.

use thiserror::Error;

use crate::repr::Base;

/// Failure to parse a numeric field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty {0} input")]
    Empty(Base),
    #[error("invalid {base} digit '{digit}'")]
    InvalidDigit { base: Base, digit: char },
    #[error("{0} value does not fit in 64 bits")]
    Overflow(Base),
}

/// Malformed UTF-8 byte sequence.
///
/// Mirrors [`std::str::Utf8Error`] but owns its data so it can live in UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A byte that cannot start or continue a sequence at this position
    /// (stray continuation, overlong form, surrogate, 0xFE/0xFF...).
    #[error("invalid UTF-8 byte at offset {offset}")]
    InvalidByte { offset: usize, len: usize },
    /// Input ended in the middle of a multi-byte sequence.
    #[error("truncated UTF-8 sequence at offset {offset}")]
    Truncated { offset: usize },
}

impl DecodeError {
    /// Offset of the first byte that could not be decoded.
    pub fn offset(&self) -> usize {
        match *self {
            Self::InvalidByte { offset, .. } | Self::Truncated { offset } => offset,
        }
    }
}

impl From<std::str::Utf8Error> for DecodeError {
    fn from(err: std::str::Utf8Error) -> Self {
        let offset = err.valid_up_to();
        match err.error_len() {
            Some(len) => Self::InvalidByte { offset, len },
            None => Self::Truncated { offset },
        }
    }
}

/// Invalid token in pasted hex-byte text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex byte '{token}' at token {index}")]
pub struct HexBytesError {
    /// Zero-based position of the token in the whitespace-split input.
    pub index: usize,
    pub token: String,
}

/// Either half of the hex-paste decoder failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexDecodeError {
    #[error(transparent)]
    Hex(#[from] HexBytesError),
    #[error(transparent)]
    Utf8(#[from] DecodeError),
}

/// Failure to load an image for the pixel inspector.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("file is empty")]
    Empty,
    #[error("unsupported or corrupt image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Clipboard write failure. Swallowed by callers after logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);
