//! Configuration management.
//!
//! Holds the base URL of each Mojang service and the logging settings.
//! Configuration is persisted as TOML on disk; every section falls back to
//! its defaults when absent.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::{MjError, MjResult};
use crate::platform::Platform;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URLs of the remote services.
    #[serde(default)]
    pub services: ServicesConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Base URL per service. Endpoint URLs are `base + relative path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Account and profile API.
    #[serde(default = "default_api")]
    pub api: String,

    /// Session server.
    #[serde(default = "default_session_server")]
    pub session_server: String,

    /// Authentication server.
    #[serde(default = "default_auth_server")]
    pub auth_server: String,

    /// Service status page.
    #[serde(default = "default_status")]
    pub status: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for log files. If empty, uses default location.
    #[serde(default)]
    pub directory: String,

    /// Enable JSON structured logging output.
    #[serde(default)]
    pub json_output: bool,
}

// Default value functions for serde

fn default_api() -> String {
    constants::API_BASE_URL.to_string()
}

fn default_session_server() -> String {
    constants::SESSION_SERVER_BASE_URL.to_string()
}

fn default_auth_server() -> String {
    constants::AUTH_SERVER_BASE_URL.to_string()
}

fn default_status() -> String {
    constants::STATUS_BASE_URL.to_string()
}

fn default_log_level() -> String {
    constants::DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            session_server: default_session_server(),
            auth_server: default_auth_server(),
            status: default_status(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: String::new(),
            json_output: false,
        }
    }
}

impl ServicesConfig {
    /// Apply `sanitize_base_url` to every base URL.
    pub fn sanitize(&mut self) {
        for url in [
            &mut self.api,
            &mut self.session_server,
            &mut self.auth_server,
            &mut self.status,
        ] {
            *url = AppConfig::sanitize_base_url(url);
        }
    }
}

impl AppConfig {
    /// Load configuration from the default config file path, or defaults
    /// when no file exists.
    pub fn load_default() -> MjResult<Self> {
        let path = Self::default_config_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &Path) -> MjResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text. Base URLs are sanitized.
    pub fn from_toml_str(contents: &str) -> MjResult<Self> {
        let mut config: AppConfig = toml::from_str(contents)?;
        config.services.sanitize();
        tracing::debug!(services = ?config.services, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to a specific file path.
    pub fn save_to_file(&self, path: &Path) -> MjResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| MjError::Config(format!("failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> MjResult<PathBuf> {
        Ok(Platform::config_dir()?.join("config.toml"))
    }

    /// Get the effective log directory, using the configured path or the default.
    pub fn effective_log_dir(&self) -> MjResult<PathBuf> {
        if self.logging.directory.is_empty() {
            Ok(Platform::data_dir()?.join("logs"))
        } else {
            Ok(PathBuf::from(&self.logging.directory))
        }
    }

    /// Normalize a configured base URL.
    ///
    /// Strips surrounding whitespace and quotes and any trailing slashes, so
    /// that appending a relative path starting with `/` yields a single slash.
    pub fn sanitize_base_url(url: &str) -> String {
        url.trim()
            .trim_matches('"')
            .trim()
            .trim_end_matches('/')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.services.api, "https://api.mojang.com");
        assert_eq!(config.services.status, "https://status.mojang.com");
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json_output);
    }

    #[test]
    fn test_sanitize_base_url() {
        assert_eq!(
            AppConfig::sanitize_base_url("https://api.mojang.com/"),
            "https://api.mojang.com"
        );
        assert_eq!(
            AppConfig::sanitize_base_url("  \"http://localhost:8080//\"  "),
            "http://localhost:8080"
        );
        assert_eq!(AppConfig::sanitize_base_url(""), "");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [services]
            api = "http://127.0.0.1:9000/"
            "#,
        )
        .unwrap();
        assert_eq!(config.services.api, "http://127.0.0.1:9000");
        assert_eq!(config.services.auth_server, "https://authserver.mojang.com");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_roundtrip_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized = AppConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(deserialized.services, config.services);
    }
}
