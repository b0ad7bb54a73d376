//! Unified path management for opsdesk configuration files.
//!
//! ```text
//! ~/.config/opsdesk/           # Config directory
//! └── config.toml              # Client configuration
//! ```

use std::path::PathBuf;

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "OPSDESK_CONFIG";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct OpsdeskPaths;

impl OpsdeskPaths {
    /// Returns the opsdesk configuration directory (e.g. `~/.config/opsdesk/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("opsdesk"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the config file path, honoring `OPSDESK_CONFIG` when set.
    pub fn config_file() -> Result<PathBuf, PathError> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
