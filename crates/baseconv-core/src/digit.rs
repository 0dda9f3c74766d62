//! Digit value to ASCII character mapping.
//!
//! Digits `0..=9` map to `'0'..='9'` and `10..=35` map to `'a'..='z'`.

use crate::radix::Radix;

/// Map a digit value to its lowercase ASCII character.
///
/// `digit` must be below 36; the converter only ever passes quotients
/// smaller than the base.
#[inline]
pub const fn to_ascii(digit: u8) -> u8 {
    debug_assert!(digit < 36);
    if digit <= 9 {
        b'0' + digit
    } else {
        b'a' + (digit - 10)
    }
}

/// Map an ASCII character back to its digit value in `radix`.
///
/// Letters are accepted in either case. Returns `None` when the byte is not
/// a digit or its value is not below the base.
#[inline]
pub fn from_ascii(byte: u8, radix: Radix) -> Option<u8> {
    let value = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 10,
        _ => return None,
    };
    (u32::from(value) < radix.get()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_digits() {
        assert_eq!(to_ascii(0), b'0');
        assert_eq!(to_ascii(9), b'9');
    }

    #[test]
    fn test_letter_digits() {
        assert_eq!(to_ascii(10), b'a');
        assert_eq!(to_ascii(15), b'f');
        assert_eq!(to_ascii(35), b'z');
    }

    #[test]
    fn test_reverse_mapping() {
        for d in 0..36u8 {
            assert_eq!(from_ascii(to_ascii(d), Radix::MAX), Some(d));
        }
        assert_eq!(from_ascii(b'F', Radix::HEX), Some(15));
    }

    #[test]
    fn test_reverse_rejects_out_of_base() {
        assert_eq!(from_ascii(b'2', Radix::BINARY), None);
        assert_eq!(from_ascii(b'g', Radix::HEX), None);
        assert_eq!(from_ascii(b'-', Radix::MAX), None);
        assert_eq!(from_ascii(b' ', Radix::DECIMAL), None);
    }
}
