use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
type Result<T> = anyhow::Result<T>;

const APP_DIR: &str = "pdarena";
const CONFIG_FILE: &str = "config.toml";
const CREDENTIAL_FILE: &str = "api_key.json";

#[derive(Debug, Default, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub credential_file: Option<PathBuf>,
}

impl ClientConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Loads `path` if it exists, otherwise an empty config.
    pub fn from_optional_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize client config")
    }

    pub fn credential_path(&self) -> Option<PathBuf> {
        self.credential_file
            .clone()
            .or_else(|| app_dir().map(|dir| dir.join(CREDENTIAL_FILE)))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(CONFIG_FILE))
}

fn app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::ClientConfig;

    #[test]
    fn test_parse_config() {
        let raw = r#"
api_url = "https://arena.example.com/api"
credential_file = "/tmp/pdarena/key.json"
"#;

        let config = ClientConfig::from_str(raw).expect("config should parse");

        assert_eq!(
            config.api_url.as_deref(),
            Some("https://arena.example.com/api")
        );
        assert_eq!(
            config.credential_path(),
            Some(PathBuf::from("/tmp/pdarena/key.json"))
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ClientConfig::from_str("").expect("empty config should parse");

        assert!(config.api_url.is_none());
        assert!(config.credential_file.is_none());
        if let Some(path) = config.credential_path() {
            assert!(path.ends_with("pdarena/api_key.json"));
        }
    }

    #[test]
    fn test_missing_optional_file_is_empty() {
        let config = ClientConfig::from_optional_file("/nonexistent/pdarena/config.toml")
            .expect("missing file should yield defaults");

        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let err = ClientConfig::from_str("api_url = 42").expect_err("wrong type should fail");

        assert!(err.to_string().contains("failed to deserialize client config"));
    }
}
