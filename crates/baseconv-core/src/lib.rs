//! # baseconv-core
//!
//! Convert signed integers to text in any base from 2 to 36, and read them
//! back.
//!
//! ## Features
//!
//! - Writes directly to any [`std::io::Write`] sink
//! - Optional caller-supplied prefix, placed after the minus sign
//! - Lossless handling of `i64::MIN`
//! - Explicit choice of what zero looks like ([`ZeroPolicy`])
//! - Bases outside `2..=36` are rejected up front by [`Radix`]

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ```rust
//! use baseconv_core::{parse, to_radix_string, Converter, Radix, ZeroPolicy};
//!
//! assert_eq!(to_radix_string(256, Radix::HEX, ""), "100");
//! assert_eq!(to_radix_string(-256, Radix::HEX, ""), "-100");
//!
//! let binary = Converter::new(Radix::BINARY).with_prefix("0b");
//! assert_eq!(binary.format(5), "0b101");
//!
//! let quiet_zero = Converter::new(Radix::DECIMAL).with_zero_policy(ZeroPolicy::Empty);
//! assert_eq!(quiet_zero.format(0), "");
//!
//! assert_eq!(parse("0b101", Radix::BINARY, "0b"), Ok(5));
//! ```

pub mod digit;
pub mod encode;
pub mod error;
pub mod parse;
pub mod radix;

pub use self::encode::{convert, to_radix_string, Converter, UnknownZeroPolicy, ZeroPolicy};
pub use self::error::{ConvertError, ParseError, Result};
pub use self::parse::{parse, parse_with_policy};
pub use self::radix::Radix;
