//! Integration tests for error handling scenarios.
//!
//! These tests verify that invalid bases and malformed input are rejected
//! with useful error messages instead of panicking.

use baseconv_core::{parse, ConvertError, ParseError, Radix};

#[test]
fn test_out_of_range_bases() {
    for (base, description) in [
        (0u32, "division by zero in the reference routine"),
        (1, "infinite loop in the reference routine"),
        (37, "no digit character available"),
        (1000, "far out of range"),
    ] {
        let err = Radix::new(base).expect_err(description);
        assert!(matches!(err, ConvertError::InvalidBase(b) if b == base));
        let msg = err.to_string();
        assert!(
            msg.contains(&base.to_string()),
            "error for {description} should name the base: {msg}"
        );
    }
}

#[test]
fn test_parse_errors_surface_as_convert_errors() {
    fn read(text: &str) -> baseconv_core::Result<i64> {
        Ok(parse(text, Radix::HEX, "0x")?)
    }

    assert_eq!(read("0x1f").unwrap(), 31);
    match read("1f") {
        Err(ConvertError::Parse(ParseError::MissingPrefix { expected })) => {
            assert_eq!(expected, "0x");
        }
        other => panic!("expected missing prefix, got {other:?}"),
    }
    assert_eq!(read("0x").unwrap_err().error_code(), "parse_error");
}

#[test]
fn test_garbage_never_panics() {
    let inputs = ["", "-", "--1", "0x", "-0x", "0x\u{1F600}", "0x 1", "0x1_000"];
    for input in inputs {
        for base in [2, 10, 16, 36] {
            let radix = Radix::new(base).unwrap();
            if let Err(e) = parse(input, radix, "0x") {
                assert!(!e.to_string().is_empty());
            }
        }
    }
}
