//! Validated numeric base.
//!
//! A [`Radix`] can only hold a base in `2..=36`, so the conversion routine
//! never sees a base that would divide by zero or loop forever.

use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// A numeric base between 2 and 36 inclusive.
///
/// # Example
///
/// ```
/// use baseconv_core::Radix;
///
/// let hex = Radix::new(16).unwrap();
/// assert_eq!(hex, Radix::HEX);
/// assert!(Radix::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub struct Radix(u8);

impl Radix {
    /// Smallest supported base.
    pub const MIN: Radix = Radix(2);
    /// Largest supported base (`0-9` plus `a-z`).
    pub const MAX: Radix = Radix(36);

    /// Base 2.
    pub const BINARY: Radix = Radix(2);
    /// Base 8.
    pub const OCTAL: Radix = Radix(8);
    /// Base 10.
    pub const DECIMAL: Radix = Radix(10);
    /// Base 16.
    pub const HEX: Radix = Radix(16);

    /// Validate `base` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidBase`] if `base` is below 2 or above 36.
    pub fn new(base: u32) -> Result<Self, ConvertError> {
        if (Self::MIN.get()..=Self::MAX.get()).contains(&base) {
            Ok(Radix(base as u8))
        } else {
            Err(ConvertError::InvalidBase(base))
        }
    }

    /// The base as a plain integer.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// The base widened for magnitude arithmetic.
    #[inline]
    pub(crate) const fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

impl Default for Radix {
    fn default() -> Self {
        Radix::DECIMAL
    }
}

impl TryFrom<u32> for Radix {
    type Error = ConvertError;

    fn try_from(base: u32) -> Result<Self, Self::Error> {
        Radix::new(base)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.get()
    }
}

impl FromStr for Radix {
    type Err = ConvertError;

    /// Parse a decimal base such as `"16"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base = s
            .trim()
            .parse::<u32>()
            .map_err(|_| ConvertError::UnparsableBase(s.to_string()))?;
        Radix::new(base)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
