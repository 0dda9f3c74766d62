//! Writing integers as base-N text.
//!
//! The converter writes straight to any [`Write`] implementor: an optional
//! `-`, the caller's prefix, then the digits most significant first. Nothing
//! is buffered on the way; wrap the sink in a `BufWriter` if that matters.
//!
//! # Example
//!
//! ```
//! use baseconv_core::{Converter, Radix};
//!
//! let hex = Converter::new(Radix::HEX).with_prefix("0x");
//! assert_eq!(hex.format(255), "0xff");
//! assert_eq!(hex.format(-256), "-0x100");
//!
//! let mut buf = Vec::new();
//! let written = hex.write_to(&mut buf, 4096).unwrap();
//! assert_eq!(&buf, b"0x1000");
//! assert_eq!(written, buf.len());
//! ```

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use crate::digit;
use crate::radix::Radix;

/// What to emit for a zero magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ZeroPolicy {
    /// Emit a single `0` digit.
    #[default]
    Digit,
    /// Emit no digits at all, only the prefix.
    Empty,
}

impl ZeroPolicy {
    /// Lowercase name as used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for ZeroPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a zero policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zero policy {0:?}, expected \"digit\" or \"empty\"")]
pub struct UnknownZeroPolicy(pub String);

impl FromStr for ZeroPolicy {
    type Err = UnknownZeroPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "digit" => Ok(Self::Digit),
            "empty" => Ok(Self::Empty),
            _ => Err(UnknownZeroPolicy(s.to_string())),
        }
    }
}

/// Write `value` in `radix` to `writer`, preceded by `prefix`.
///
/// Negative values get a leading `-` before the prefix. The magnitude is
/// taken as `u64`, so `i64::MIN` is written without overflow.
///
/// Returns the number of bytes written on success.
///
/// # Errors
///
/// Returns an I/O error if the write fails. Bytes written before the
/// failure stay in the sink.
pub fn convert<W: Write>(
    writer: &mut W,
    value: i64,
    radix: Radix,
    prefix: &str,
    zero_policy: ZeroPolicy,
) -> io::Result<usize> {
    let mut written = 0;

    if value < 0 {
        writer.write_all(b"-")?;
        written += 1;
    }
    let magnitude = value.unsigned_abs();

    writer.write_all(prefix.as_bytes())?;
    written += prefix.len();

    written += if magnitude == 0 {
        match zero_policy {
            ZeroPolicy::Digit => {
                writer.write_all(b"0")?;
                1
            }
            ZeroPolicy::Empty => 0,
        }
    } else {
        write_magnitude(writer, magnitude, radix)?
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(value, base = radix.get(), bytes = written, "converted");

    Ok(written)
}

/// Convert to a new `String` using the default [`ZeroPolicy`].
#[must_use]
pub fn to_radix_string(value: i64, radix: Radix, prefix: &str) -> String {
    Converter::new(radix).with_prefix(prefix).format(value)
}

/// Emit the digits of a non-zero magnitude, most significant first.
///
/// Each pass finds the largest power of the base that fits, writes the
/// leading digit, then writes a `0` for every lower place that is empty in
/// the remainder before moving on to the next non-zero digit.
fn write_magnitude<W: Write>(writer: &mut W, mut n: u64, radix: Radix) -> io::Result<usize> {
    let base = radix.as_u64();
    let mut written = 0;

    while n != 0 {
        // divisor <= n / base keeps divisor * base <= n, so this cannot overflow
        let mut divisor = 1u64;
        while divisor <= n / base {
            divisor *= base;
        }

        // n / divisor < base, so it fits a digit
        writer.write_all(&[digit::to_ascii((n / divisor) as u8)])?;
        written += 1;

        while divisor / base != 0 && (n % divisor) / (divisor / base) == 0 {
            writer.write_all(b"0")?;
            written += 1;
            divisor /= base;
        }

        n %= divisor;
    }

    Ok(written)
}

/// A reusable conversion setup: base, prefix and zero policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    radix: Radix,
    prefix: String,
    zero_policy: ZeroPolicy,
}

impl Converter {
    /// Create a converter for `radix` with no prefix and the default
    /// zero policy.
    pub fn new(radix: Radix) -> Self {
        Self {
            radix,
            prefix: String::new(),
            zero_policy: ZeroPolicy::default(),
        }
    }

    /// Set the prefix written after the sign and before the digits.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the zero policy.
    #[must_use]
    pub fn with_zero_policy(mut self, zero_policy: ZeroPolicy) -> Self {
        self.zero_policy = zero_policy;
        self
    }

    /// The target base.
    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// The prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The zero policy.
    pub fn zero_policy(&self) -> ZeroPolicy {
        self.zero_policy
    }

    /// Write `value` to `writer`. See [`convert`].
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the write fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, value: i64) -> io::Result<usize> {
        convert(writer, value, self.radix, &self.prefix, self.zero_policy)
    }

    /// Convert `value` into a new `String`.
    #[must_use]
    pub fn format(&self, value: i64) -> String {
        // sign + prefix + 64 binary digits
        let mut buf = Vec::with_capacity(1 + self.prefix.len() + 64);
        // Writing into a Vec cannot fail.
        let _ = self.write_to(&mut buf, value);
        // Prefix is a &str and digits are ASCII, so the bytes are valid UTF-8.
        String::from_utf8(buf).unwrap_or_default()
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Radix::default())
    }
}
