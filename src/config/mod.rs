//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions and file loading
//! - [`defaults`]: serde default value functions
//! - [`validation`]: checks run after loading, collecting every problem

mod defaults;
mod types;
pub mod validation;

pub use defaults::DEFAULT_VALUE;
pub use types::{Config, ConfigError};
