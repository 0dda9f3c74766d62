//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use baseconv_core::Radix;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "defaults.base must be between {min} and {max}, got {0}",
        min = Radix::MIN,
        max = Radix::MAX
    )]
    InvalidBase(u32),
    #[error("defaults.prefix must not contain control characters, got {0:?}")]
    PrefixHasControlChars(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if Radix::new(config.defaults.base).is_err() {
        errors.push(ValidationError::InvalidBase(config.defaults.base));
    }

    let prefix = &config.defaults.prefix;
    if prefix.chars().any(char::is_control) {
        errors.push(ValidationError::PrefixHasControlChars(prefix.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
