//! Project configuration (crucible.toml)

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Contents of a crucible.toml file
///
/// Every table and field is optional; absent fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Suite-level settings
    #[serde(default)]
    pub suite: SuiteConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// The [suite] table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Human-readable suite name
    pub name: Option<String>,

    /// Selection to run when no names are given on the command line;
    /// empty means run everything
    #[serde(default)]
    pub default_tests: Vec<String>,
}

/// The [output] table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// When to colorize diagnostic lines
    #[serde(default)]
    pub color: ColorMode,

    /// Print per-run timing
    #[serde(default)]
    pub verbose: bool,
}

/// Color behavior for diagnostic output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the terminal: color when stdout is a tty
    #[default]
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

impl ProjectConfig {
    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents, path)
    }

    /// Parse configuration from TOML text
    pub fn parse(contents: &str, path: &Path) -> ConfigResult<Self> {
        toml::from_str(contents).map_err(|error| ConfigError::TomlParse {
            file: path.to_path_buf(),
            error,
        })
    }
}
