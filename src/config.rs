//! Configuration for the reference host
//!
//! Handles loading and merging configuration from multiple sources:
//! 1. Compiled defaults
//! 2. User config (~/.bitmind/config.toml)
//! 3. CLI-specified config file
//! 4. Environment variables

use crate::client::Endpoints;
use crate::error::ConfigError;
use crate::host::{Settings, BITMIND_SECRET};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the BitMind token
pub const TOKEN_ENV: &str = "BITMIND_API_TOKEN";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Secret store, keyed by secret name
    pub secrets: HashMap<String, String>,
    pub endpoints: Endpoints,
}

impl Config {
    /// Load configuration from all sources
    pub fn load(cli_config: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                debug!("Loading user config from {:?}", user_config);
                config.merge_from_file(&user_config)?;
            }
        }

        if let Some(path) = cli_config {
            debug!("Loading CLI config from {:?}", path);
            config.merge_from_file(path)?;
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Default per-user config location
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".bitmind/config.toml"))
    }

    /// Merge configuration from a file
    fn merge_from_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;

        let file_config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;

        self.merge(file_config);
        Ok(())
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.secrets.extend(other.secrets);

        let defaults = Endpoints::default();
        if other.endpoints.detect_image != defaults.detect_image {
            self.endpoints.detect_image = other.endpoints.detect_image;
        }
        if other.endpoints.ai_score != defaults.ai_score {
            self.endpoints.ai_score = other.endpoints.ai_score;
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            self.secrets.insert(BITMIND_SECRET.to_string(), token);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, url) in [
            ("endpoints.detect_image", &self.endpoints.detect_image),
            ("endpoints.ai_score", &self.endpoints.ai_score),
        ] {
            if url.is_empty() {
                return Err(ConfigError::MissingField(field.to_string()));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be an http(s) URL, got {:?}",
                    field, url
                )));
            }
        }

        Ok(())
    }
}

impl Settings for Config {
    fn secret(&self, key: &str) -> Option<&str> {
        self.secrets.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.secrets.is_empty());
        assert_eq!(config.endpoints, Endpoints::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let toml_str = r#"
            [secrets]
            bitmind = "abc"

            [endpoints]
            ai_score = "http://localhost:8080/ai-score"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.bitmind_token(), Some("abc"));
        assert_eq!(config.endpoints.ai_score, "http://localhost:8080/ai-score");
        assert_eq!(
            config.endpoints.detect_image,
            Endpoints::default().detect_image
        );
    }

    #[test]
    fn test_merge_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[secrets]\nbitmind = \"from-file\"\n\n[endpoints]\ndetect_image = \"http://127.0.0.1:9/detect\""
        )
        .unwrap();

        let mut config = Config::default();
        config.merge_from_file(file.path()).unwrap();

        assert_eq!(config.secret("bitmind"), Some("from-file"));
        assert_eq!(config.endpoints.detect_image, "http://127.0.0.1:9/detect");
        assert_eq!(config.endpoints.ai_score, Endpoints::default().ai_score);
    }

    #[test]
    fn test_merge_missing_file() {
        let mut config = Config::default();
        let err = config
            .merge_from_file(Path::new("/nonexistent/bitmind.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }

    #[test]
    fn test_merge_bad_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "secrets = [").unwrap();

        let mut config = Config::default();
        let err = config.merge_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_endpoint() {
        let mut config = Config::default();
        config.endpoints.ai_score = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.endpoints.ai_score = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));
    }
}
