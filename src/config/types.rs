//! Core configuration types and loading.

use baseconv_core::ZeroPolicy;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::defaults::{default_base, default_prefix, default_trailing_newline};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Program configuration. Every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Conversion parameters used when the command line omits them.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// Output formatting.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Fallback conversion parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    /// Target base (default: 16). Checked by validation, not here, so that
    /// every bad field is reported at once.
    #[serde(default = "default_base")]
    pub base: u32,
    /// Text written after the sign and before the digits (default: empty).
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            prefix: default_prefix(),
        }
    }
}

/// Output formatting configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// What zero looks like: `"digit"` prints `0`, `"empty"` prints nothing.
    #[serde(default)]
    pub zero_policy: ZeroPolicy,
    /// Append `\n` after the digits (default: false).
    #[serde(default = "default_trailing_newline")]
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            zero_policy: ZeroPolicy::default(),
            trailing_newline: default_trailing_newline(),
        }
    }
}
