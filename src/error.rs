//! Unified error handling for the baseconv binary.
//!
//! Collects every way a run can fail into [`AppError`] so that `main` can
//! log it with a stable error code before exiting.

use baseconv_core::ConvertError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::config::validation::ValidationError;

/// Errors that end a run with a non-zero exit status.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(ConfigError::Io(_)) => "config_io",
            Self::Config(ConfigError::Parse(_)) => "config_parse",
            Self::Validation(_) => "config_invalid",
            Self::Convert(e) => e.error_code(),
            Self::Output(_) => "output_error",
        }
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
