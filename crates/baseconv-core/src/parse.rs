//! Reading base-N text back into an integer.
//!
//! Accepts exactly the layout the converter writes: an optional `-`, the
//! prefix, then digits. Letters are accepted in either case.

use crate::digit;
use crate::encode::ZeroPolicy;
use crate::error::ParseError;
use crate::radix::Radix;

/// Parse `text` written in `radix` with the given `prefix`.
///
/// An empty digit string is rejected; use [`parse_with_policy`] with
/// [`ZeroPolicy::Empty`] to read output that encodes zero as no digits.
///
/// # Example
///
/// ```
/// use baseconv_core::{parse, Radix};
///
/// assert_eq!(parse("-0x100", Radix::HEX, "0x"), Ok(-256));
/// ```
///
/// # Errors
///
/// See [`ParseError`].
pub fn parse(text: &str, radix: Radix, prefix: &str) -> Result<i64, ParseError> {
    parse_with_policy(text, radix, prefix, ZeroPolicy::Digit)
}

/// Parse `text`, treating an empty digit string as zero when `zero_policy`
/// is [`ZeroPolicy::Empty`].
///
/// # Errors
///
/// See [`ParseError`].
pub fn parse_with_policy(
    text: &str,
    radix: Radix,
    prefix: &str,
    zero_policy: ZeroPolicy,
) -> Result<i64, ParseError> {
    let (negative, rest, mut position) = match text.strip_prefix('-') {
        Some(rest) => (true, rest, 1),
        None => (false, text, 0),
    };

    let digits = rest
        .strip_prefix(prefix)
        .ok_or_else(|| ParseError::MissingPrefix {
            expected: prefix.to_string(),
        })?;
    position += prefix.len();

    if digits.is_empty() {
        return match zero_policy {
            ZeroPolicy::Empty => Ok(0),
            ZeroPolicy::Digit => Err(ParseError::Empty),
        };
    }

    let base = radix.as_u64();
    let mut magnitude: u64 = 0;
    for &byte in digits.as_bytes() {
        let value = digit::from_ascii(byte, radix)
            .ok_or(ParseError::InvalidDigit { byte, position })?;
        magnitude = magnitude
            .checked_mul(base)
            .and_then(|m| m.checked_add(u64::from(value)))
            .ok_or(ParseError::Overflow)?;
        position += 1;
    }

    if negative {
        // i64::MIN has no positive counterpart, so go through i128
        i64::try_from(-i128::from(magnitude)).map_err(|_| ParseError::Overflow)
    } else {
        i64::try_from(magnitude).map_err(|_| ParseError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        assert_eq!(parse("100", Radix::HEX, ""), Ok(256));
        assert_eq!(parse("-100", Radix::HEX, ""), Ok(-256));
        assert_eq!(parse("FF", Radix::HEX, ""), Ok(255));
        assert_eq!(parse("prefix:100", Radix::DECIMAL, "prefix:"), Ok(100));
    }

    #[test]
    fn test_parse_extremes() {
        assert_eq!(
            parse("-9223372036854775808", Radix::DECIMAL, ""),
            Ok(i64::MIN)
        );
        assert_eq!(
            parse("9223372036854775807", Radix::DECIMAL, ""),
            Ok(i64::MAX)
        );
        assert_eq!(
            parse("9223372036854775808", Radix::DECIMAL, ""),
            Err(ParseError::Overflow)
        );
        assert_eq!(
            parse("-9223372036854775809", Radix::DECIMAL, ""),
            Err(ParseError::Overflow)
        );
        assert_eq!(
            parse("zzzzzzzzzzzzzzzzzz", Radix::MAX, ""),
            Err(ParseError::Overflow)
        );
    }

    #[test]
    fn test_parse_missing_prefix() {
        assert_eq!(
            parse("100", Radix::HEX, "0x"),
            Err(ParseError::MissingPrefix {
                expected: "0x".to_string()
            })
        );
        // sign comes before the prefix, never after
        assert!(parse("0x-100", Radix::HEX, "0x").is_err());
    }

    #[test]
    fn test_parse_invalid_digit_position() {
        assert_eq!(
            parse("-0x1g", Radix::HEX, "0x"),
            Err(ParseError::InvalidDigit {
                byte: b'g',
                position: 4
            })
        );
    }

    #[test]
    fn test_parse_empty_digits() {
        assert_eq!(parse("", Radix::DECIMAL, ""), Err(ParseError::Empty));
        assert_eq!(
            parse_with_policy("", Radix::DECIMAL, "", ZeroPolicy::Empty),
            Ok(0)
        );
        assert_eq!(
            parse_with_policy("id:", Radix::DECIMAL, "id:", ZeroPolicy::Empty),
            Ok(0)
        );
    }
}
