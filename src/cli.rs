//! Command-line argument parsing.
//!
//! Positional arguments win over the config file, which wins over the
//! built-in defaults. With no arguments at all the program prints 256 in
//! base 16.

use std::path::PathBuf;

use baseconv_core::{Converter, Radix, ZeroPolicy};
use clap::Parser;

use crate::config::{Config, DEFAULT_VALUE};
use crate::error::AppError;

/// baseconv command-line arguments
#[derive(Parser, Debug)]
#[command(name = "baseconv", version)]
#[command(about = "Print a signed integer in any base from 2 to 36")]
pub struct Args {
    /// Value to convert (default: 256)
    #[arg(allow_negative_numbers = true)]
    pub value: Option<i64>,

    /// Target base, 2 to 36 (default: config, else 16)
    pub base: Option<u32>,

    /// Text written after the sign and before the digits
    #[arg(allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Path to a TOML config file
    #[arg(long, short, env = "BASECONV_CONFIG")]
    pub config: Option<PathBuf>,

    /// What zero looks like: "digit" prints 0, "empty" prints nothing
    #[arg(long, value_name = "POLICY")]
    pub zero_policy: Option<ZeroPolicy>,

    /// Append a newline after the output
    #[arg(long, short)]
    pub newline: bool,
}

/// A fully resolved conversion, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub value: i64,
    pub converter: Converter,
    pub trailing_newline: bool,
}

impl Args {
    /// Merge arguments over `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Convert`] if the chosen base is out of range.
    pub fn resolve(&self, config: &Config) -> Result<Request, AppError> {
        let base = self.base.unwrap_or(config.defaults.base);
        let radix = Radix::new(base)?;

        let prefix = self
            .prefix
            .clone()
            .unwrap_or_else(|| config.defaults.prefix.clone());

        let converter = Converter::new(radix)
            .with_prefix(prefix)
            .with_zero_policy(self.zero_policy.unwrap_or(config.output.zero_policy));

        Ok(Request {
            value: self.value.unwrap_or(DEFAULT_VALUE),
            converter,
            trailing_newline: self.newline || config.output.trailing_newline,
        })
    }
}
