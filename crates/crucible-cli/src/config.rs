//! CLI configuration via environment variables
//!
//! Crucible uses environment variables for optional configuration.
//! This keeps the CLI simple while allowing customization.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Disable colored output (CRUCIBLE_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
    /// Print run timing (CRUCIBLE_VERBOSE=1)
    pub verbose: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            no_color: env::var("CRUCIBLE_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
            verbose: env::var("CRUCIBLE_VERBOSE")
                .map(|v| {
                    let lower = v.to_lowercase();
                    !(lower.is_empty() || lower == "0" || lower == "false" || lower == "off")
                })
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
