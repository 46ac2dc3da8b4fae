//! Application configuration
//!
//! Settings are read from a JSON file in the user's config directory:
//! - Linux: ~/.config/artworks-explorer/config.json
//! - macOS: ~/Library/Application Support/artworks-explorer/config.json
//! - Windows: %APPDATA%\artworks-explorer\config.json
//!
//! Every field is optional; a missing file means "all defaults".

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default catalog endpoint (Art Institute of Chicago public API)
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Settings for the remote catalog client
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL; `/artworks` is appended for page requests
    pub base_url: String,
    /// Request timeout in seconds. `None` waits forever.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: format!("artworks-explorer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    /// Use the dark theme instead of the light one
    pub dark_theme: bool,
}

impl AppConfig {
    /// Load the config from the default location, falling back to defaults
    ///
    /// An unreadable or malformed file is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            tracing::debug!("no config directory on this platform, using defaults");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get the path where the config file is expected
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("artworks-explorer");
        path.push("config.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.catalog.timeout_secs, None);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(
            r#"{ "catalog": { "timeout_secs": 15 }, "dark_theme": true }"#,
        )
        .unwrap();

        assert!(config.dark_theme);
        assert_eq!(config.catalog.timeout_secs, Some(15));
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AppConfig::from_file(Path::new("/nonexistent/artworks-explorer.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(AppConfig::from_json("{ dark_theme: yes }").is_err());
    }
}
