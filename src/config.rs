//! Top-level application configuration.
//!
//! Configuration is stored as YAML (`config.yaml`) in the platform config
//! directory, or at the path named by `ASSUNTOS_CONFIG`. It holds:
//! - The backend base URL
//! - An optional request timeout

use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AssuntoError, Result};
use crate::types::DEFAULT_BASE_URL;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "ASSUNTOS_CONFIG";

/// Environment variable overriding the configured base URL
pub const BASE_URL_ENV: &str = "ASSUNTOS_BASE_URL";

/// Keys accepted by `config get` / `config set`
pub const VALID_KEYS: &[&str] = &["base_url", "request_timeout"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Origin of the subjects backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (absent = no timeout)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_PATH_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        ProjectDirs::from("", "", "assuntos")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
            .ok_or_else(|| {
                AssuntoError::Config("could not determine a configuration directory".to_string())
            })
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        tracing::debug!("wrote configuration to {}", path.display());
        Ok(())
    }

    /// Resolve the base URL to use: explicit override, then `ASSUNTOS_BASE_URL`,
    /// then the file value.
    pub fn effective_base_url(&self, cli_override: Option<&str>) -> String {
        if let Some(url) = cli_override
            && !url.is_empty()
        {
            return url.to_string();
        }

        if let Ok(url) = env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }

        self.base_url.clone()
    }

    /// Configured request timeout, if any
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Read a single key as a display string
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "base_url" => Ok(Some(self.base_url.clone())),
            "request_timeout" => Ok(self.request_timeout.map(|t| t.to_string())),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a single key from its string form, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "base_url" => {
                validate_base_url(value)?;
                self.base_url = value.trim_end_matches('/').to_string();
            }
            "request_timeout" => {
                let value = value.trim();
                if value.is_empty() || value == "none" || value == "0" {
                    self.request_timeout = None;
                } else {
                    let secs: u64 = value.parse().map_err(|_| {
                        AssuntoError::Config(format!(
                            "request_timeout must be a number of seconds, got '{value}'"
                        ))
                    })?;
                    self.request_timeout = Some(secs);
                }
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> AssuntoError {
    AssuntoError::Config(format!(
        "unknown config key '{}'. Valid keys: {}",
        key,
        VALID_KEYS.join(", ")
    ))
}

/// Parse and check a base URL. Only http and https origins are accepted.
pub fn validate_base_url(value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| AssuntoError::InvalidUrl(value.to_string(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AssuntoError::InvalidUrl(
            value.to_string(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert!(config.request_timeout.is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.set("base_url", "https://api.example.com/").unwrap();
        config.set("request_timeout", "15").unwrap();

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed.base_url, "https://api.example.com");
        assert_eq!(parsed.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let parsed: Config = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("base_url", "not a url").is_err());
        assert!(config.set("base_url", "ftp://example.com").is_err());
        assert!(config.set("request_timeout", "soon").is_err());
        assert!(config.set("nope", "1").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_request_timeout_clear() {
        let mut config = Config::default();
        config.set("request_timeout", "30").unwrap();
        config.set("request_timeout", "none").unwrap();
        assert!(config.request_timeout.is_none());
    }

    #[test]
    fn test_get_values() {
        let config = Config::default();
        assert_eq!(
            config.get("base_url").unwrap().as_deref(),
            Some("http://localhost:8080")
        );
        assert_eq!(config.get("request_timeout").unwrap(), None);
        assert!(config.get("token").is_err());
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config::default();
        assert_eq!(
            config.effective_base_url(Some("http://10.0.0.2:9000")),
            "http://10.0.0.2:9000"
        );
    }
}
