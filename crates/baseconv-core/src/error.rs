//! Error types for base conversion.
//!
//! Conversion itself has exactly one failure mode that callers can trigger,
//! an out-of-range base. Everything else is either an I/O failure of the
//! output sink or a failure to read digits back with [`crate::parse`].

use thiserror::Error;

/// Convenience type alias for Results using [`ConvertError`].
pub type Result<T, E = ConvertError> = std::result::Result<T, E>;

/// Top-level conversion errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// Base outside of the supported `2..=36` range.
    #[error("invalid base {0}: must be between 2 and 36")]
    InvalidBase(u32),

    /// Base text that is not a decimal number.
    #[error("invalid base {0:?}: not a number")]
    UnparsableBase(String),

    /// The output sink rejected a write.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Digits could not be read back.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

impl ConvertError {
    /// Get a static error code string for logging and metrics labels.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBase(_) | Self::UnparsableBase(_) => "invalid_base",
            Self::Io(_) => "io_error",
            Self::Parse(_) => "parse_error",
        }
    }
}

/// Errors encountered when reading a converted number back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Input did not carry the expected prefix after the optional sign.
    #[error("missing prefix {expected:?}")]
    MissingPrefix {
        /// The prefix that was expected.
        expected: String,
    },

    /// No digits after the sign and prefix.
    #[error("no digits")]
    Empty,

    /// A byte that is not a digit in the requested base.
    #[error("invalid digit {byte:#04x} at position {position}")]
    InvalidDigit {
        /// The offending byte.
        byte: u8,
        /// Byte offset in the full input.
        position: usize,
    },

    /// The value does not fit in an `i64`.
    #[error("value out of range for i64")]
    Overflow,
}
