//! Configuration file discovery and loading.
//!
//! Lookup order:
//! 1. An explicit file passed with `--config`
//! 2. Project config (`.rewind/config.yml`)
//! 3. Built-in defaults

use crate::config::schema::RewindConfig;
use crate::config::validator::validate;
use crate::error::{Result, RewindError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding rewind's project files.
pub const PROJECT_DIR: &str = ".rewind";

/// Project config file name inside [`PROJECT_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Find project config at .rewind/config.yml
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(PROJECT_DIR).join(CONFIG_FILE);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into RewindConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<RewindConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RewindError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RewindError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into RewindConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<RewindConfig> {
    if content.trim().is_empty() {
        return Ok(RewindConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| RewindError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate config with optional path override.
///
/// If `config_override` is provided, only that file is read and it must
/// exist. Otherwise the project config is used when present, and the
/// defaults when not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<RewindConfig> {
    let config = match config_override {
        Some(path) => load_config_file(path)?,
        None => match find_project_config(project_root) {
            Some(path) => load_config_file(&path)?,
            None => {
                tracing::debug!("No project config found, using defaults");
                RewindConfig::default()
            }
        },
    };

    validate(&config)?;
    Ok(config)
}
