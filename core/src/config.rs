use crate::errors::{GeminiError, GeminiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Base URL of the hosted generative-AI endpoint.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the provider API key.
pub const API_KEY_ENV_VAR: &str = "GOOGLE_API_KEY";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration for the suggestion pipeline
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SuggesterConfig {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    /// Override for the provider endpoint; mainly useful for pointing the
    /// client at a local stub.
    pub api_base: Option<String>,
    /// Upper bound on one provider round trip. Provider latency is unbounded
    /// otherwise.
    pub request_timeout_secs: Option<u64>,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model_name: Some(DEFAULT_MODEL.to_string()),
            api_base: Some(DEFAULT_API_BASE.to_string()),
            request_timeout_secs: Some(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl SuggesterConfig {
    /// Loads configuration from a file if it exists, otherwise returns the
    /// default config
    pub fn load_from_file(path: &Path) -> GeminiResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                GeminiError::ConfigError(format!("Failed to read config file: {}", e))
            })?;

            let config: Self = toml::from_str(&content).map_err(|e| {
                GeminiError::ConfigError(format!("Failed to parse config file: {}", e))
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Merges this config with another config, preferring values from the
    /// other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            api_key: other.api_key.clone().or_else(|| self.api_key.clone()),
            model_name: other.model_name.clone().or_else(|| self.model_name.clone()),
            api_base: other.api_base.clone().or_else(|| self.api_base.clone()),
            request_timeout_secs: other.request_timeout_secs.or(self.request_timeout_secs),
        }
    }

    /// Resolved API key: the explicit config value, then the provider's
    /// environment variable.
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env::var(API_KEY_ENV_VAR).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn model_name(&self) -> String {
        self.model_name
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn api_base(&self) -> String {
        self.api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

/// Helper function to get the default config directory
pub fn get_default_config_dir() -> GeminiResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        GeminiError::ConfigError("Could not determine home directory".to_string())
    })?;

    Ok(home_dir.join(".config").join("remote-guardian"))
}

/// Helper function to get the default config file path
pub fn get_default_config_file() -> GeminiResult<PathBuf> {
    let config_dir = get_default_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SuggesterConfig::load_from_file(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(config.model_name(), DEFAULT_MODEL);
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn partial_file_keeps_unset_fields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "model_name = \"gemini-1.5-pro\"\n").unwrap();

        let config = SuggesterConfig::load_from_file(&path).unwrap();
        assert_eq!(config.model_name(), "gemini-1.5-pro");
        // Accessors re-apply defaults for anything the file left out.
        assert!(config.api_base.is_none());
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn invalid_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "model_name = [not toml").unwrap();

        let err = SuggesterConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, GeminiError::ConfigError(_)));
    }

    #[test]
    fn merge_prefers_the_overriding_config() {
        let base = SuggesterConfig::default();
        let overriding = SuggesterConfig {
            api_key: Some("from-args".to_string()),
            model_name: None,
            api_base: None,
            request_timeout_secs: Some(5),
        };

        let merged = base.merge(&overriding);
        assert_eq!(merged.api_key.as_deref(), Some("from-args"));
        assert_eq!(merged.model_name.as_deref(), Some(DEFAULT_MODEL));
        assert_eq!(merged.request_timeout_secs, Some(5));
    }

    #[test]
    fn explicit_api_key_wins_over_environment() {
        let config = SuggesterConfig {
            api_key: Some("explicit".to_string()),
            ..SuggesterConfig::default()
        };
        assert_eq!(config.resolved_api_key().as_deref(), Some("explicit"));
    }

    #[test]
    fn api_key_falls_back_to_the_environment_variable() {
        // This is the one test that touches the process environment.
        env::set_var(API_KEY_ENV_VAR, "from-env");
        let config = SuggesterConfig {
            api_key: None,
            ..SuggesterConfig::default()
        };
        assert_eq!(config.resolved_api_key().as_deref(), Some("from-env"));
        env::remove_var(API_KEY_ENV_VAR);
    }

    #[test]
    fn trailing_slash_is_stripped_from_the_api_base() {
        let config = SuggesterConfig {
            api_base: Some("http://127.0.0.1:9000/v1beta/".to_string()),
            ..SuggesterConfig::default()
        };
        assert_eq!(config.api_base(), "http://127.0.0.1:9000/v1beta");
    }
}
