//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the client configuration
//! from the configuration file (~/.config/opsdesk/config.toml) and applies
//! environment overrides on top.

use crate::paths::OpsdeskPaths;
use opsdesk_core::config::ClientConfig;
use opsdesk_core::error::{OpsdeskError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Overrides `api.base_url`.
pub const API_URL_ENV: &str = "OPSDESK_API_URL";
/// Overrides `api.auth_token`.
pub const API_TOKEN_ENV: &str = "OPSDESK_API_TOKEN";

/// Configuration service that loads and caches the client configuration.
///
/// A missing file is not an error: defaults are used. A file that exists but
/// cannot be parsed is reported by [`ConfigService::load`].
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading from the default location.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading from an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// Falls back to defaults (plus environment overrides) when the file
    /// cannot be read.
    pub fn get_config(&self) -> ClientConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        self.load().unwrap_or_else(|e| {
            tracing::warn!("[ConfigService] Using default configuration: {}", e);
            let fallback = apply_env_overrides(ClientConfig::default(), |key| std::env::var(key).ok());
            let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
            *write_lock = Some(fallback.clone());
            fallback
        })
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = None;
    }

    /// Reads the config file, applies process environment overrides and
    /// refreshes the cache.
    pub fn load(&self) -> Result<ClientConfig> {
        let path = self.config_path()?;
        let config = apply_env_overrides(load_from_file(&path)?, |key| std::env::var(key).ok());

        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = Some(config.clone());
        Ok(config)
    }

    /// Returns the file this service reads.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => OpsdeskPaths::config_file().map_err(|e| OpsdeskError::config(e.to_string())),
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a config file; a missing file yields the defaults.
pub fn load_from_file(path: &Path) -> Result<ClientConfig> {
    if !path.exists() {
        tracing::debug!("[ConfigService] No config file at {:?}, using defaults", path);
        return Ok(ClientConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: ClientConfig = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Applies environment overrides using the given lookup.
pub fn apply_env_overrides<F>(mut config: ClientConfig, lookup: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
        config.api.base_url = url;
    }
    if let Some(token) = lookup(API_TOKEN_ENV).filter(|v| !v.trim().is_empty()) {
        config.api.auth_token = Some(token);
    }
    config
}

fn validate(config: &ClientConfig) -> Result<()> {
    if config.api.base_url.trim().is_empty() {
        return Err(OpsdeskError::config("api.base_url must not be empty"));
    }
    if config.chat.page_size == 0 {
        return Err(OpsdeskError::config("chat.page_size must be at least 1"));
    }
    Ok(())
}
