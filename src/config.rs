//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        ConfigError::Invalid(msg.into())
    }
}

/// Colour palette selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

/// Settings read from `config.toml`; every field has a default
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the REST store
    pub base_url: String,

    /// Collection holding the ingredients
    pub collection: String,

    /// Quiet period before a filter edit is sent
    pub debounce_ms: u64,

    /// Per-request deadline; unset means requests may wait forever
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Serve the collection from memory instead of the network
    pub offline: bool,

    pub theme: ThemeName,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9000".to_string(),
            collection: "ingredients".to_string(),
            debounce_ms: 500,
            request_timeout_secs: None,
            offline: false,
            theme: ThemeName::Dark,
        }
    }
}

impl AppConfig {
    /// `<config dir>/larder/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("larder")
            .join("config.toml")
    }

    /// Load configuration from file, falling back to defaults when it does not exist
    pub async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ConfigError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        tokio::fs::write(path, content)
            .await
            .map_err(|source| ConfigError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(())
    }

    /// Validate configuration settings
    pub fn validate(&self) -> ConfigResult<()> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::invalid(format!("base_url {}: {}", self.base_url, e)))?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::invalid(format!(
                "base_url {} cannot hold a collection",
                self.base_url
            )));
        }

        if self.collection.trim().is_empty() {
            return Err(ConfigError::invalid("collection cannot be empty"));
        }

        if self.debounce_ms == 0 {
            return Err(ConfigError::invalid("debounce_ms must be greater than 0"));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::invalid(
                "request_timeout_secs must be greater than 0 when set",
            ));
        }

        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
