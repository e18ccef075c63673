//! Crucible Configuration System
//!
//! Provides configuration management for Crucible suites:
//! - Project configuration (crucible.toml)
//! - Discovery by walking up from a start directory
//!
//! Configuration is advisory: a missing crucible.toml yields defaults, and
//! CLI flags and environment variables override whatever the file says
//! (precedence is handled by the caller).

pub mod loader;
pub mod project;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParse {
        file: PathBuf,
        error: toml::de::Error,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use loader::ConfigLoader;
pub use project::{ColorMode, OutputConfig, ProjectConfig, SuiteConfig};
