//! Configuration Loader
//!
//! Finds crucible.toml by walking up the directory tree from a start
//! directory, the same way a suite binary is usually launched from somewhere
//! inside the project.

use crate::project::ProjectConfig;
use crate::ConfigResult;
use std::path::{Path, PathBuf};

/// Configuration loader
pub struct ConfigLoader {
    file_name: String,
}

/// Loaded configuration plus where it came from
#[derive(Debug, Clone)]
pub struct Config {
    /// Project configuration
    pub project: ProjectConfig,

    /// Directory containing crucible.toml, if one was found
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader looking for the standard file name
    pub fn new() -> Self {
        Self {
            file_name: "crucible.toml".to_string(),
        }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree; if no crucible.toml exists anywhere on
    /// the path to the filesystem root, returns defaults with no root.
    pub fn load_from_directory(&self, start_dir: &Path) -> ConfigResult<Config> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(&self.file_name);

            if config_path.exists() {
                let project = ProjectConfig::load_from_file(&config_path)?;
                return Ok(Config {
                    project,
                    project_root: Some(current),
                });
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Ok(Config {
                        project: ProjectConfig::default(),
                        project_root: None,
                    });
                }
            }
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempdir().unwrap();
        let config = ConfigLoader::new()
            .load_from_directory(dir.path())
            .unwrap();
        assert!(config.project_root.is_none());
        assert_eq!(config.project, ProjectConfig::default());
    }

    #[test]
    fn test_config_found_in_start_directory() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("crucible.toml"),
            "[suite]\nname = \"local\"\n",
        )
        .unwrap();

        let config = ConfigLoader::new()
            .load_from_directory(dir.path())
            .unwrap();
        assert_eq!(config.project.suite.name.as_deref(), Some("local"));
        assert_eq!(config.project_root.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_config_found_by_walking_up() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("crucible.toml"),
            "[suite]\nname = \"above\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = ConfigLoader::new().load_from_directory(&nested).unwrap();
        assert_eq!(config.project.suite.name.as_deref(), Some("above"));
        assert_eq!(config.project_root.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_broken_config_surfaces_the_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("crucible.toml"), "[suite\n").unwrap();

        let result = ConfigLoader::new().load_from_directory(dir.path());
        assert!(result.is_err());
    }
}
