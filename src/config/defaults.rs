//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use baseconv_core::Radix;

/// Value converted when none is given on the command line.
pub const DEFAULT_VALUE: i64 = 256;

// =============================================================================
// Conversion Defaults
// =============================================================================

pub fn default_base() -> u32 {
    Radix::HEX.get()
}

pub fn default_prefix() -> String {
    String::new()
}

// =============================================================================
// Output Defaults
// =============================================================================

pub fn default_trailing_newline() -> bool {
    false
}
