use crate::error::{DashError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_API_HOST: &str = "https://app.datadoghq.com";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_API_KEY: &str = "DASHCTL_API_KEY";
pub const ENV_APP_KEY: &str = "DASHCTL_APP_KEY";
pub const ENV_API_HOST: &str = "DASHCTL_API_HOST";
pub const ENV_CONFIG: &str = "DASHCTL_CONFIG";

/// Credentials and endpoint settings, stored in `config.json`.
///
/// Built once at startup and handed to the service client; nothing reads it
/// from global state afterwards.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DashConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub app_key: Option<String>,

    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Per-request timeout for the HTTP client
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            app_key: None,
            api_host: default_api_host(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Values that take precedence over the config file, typically from flags.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub app_key: Option<String>,
    pub api_host: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl DashConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file path, or return defaults if not found
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DashError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| DashError::Config(format!("invalid {}: {}", path.display(), e)))
    }

    /// Apply `DASHCTL_*` environment variables through `lookup`.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_API_KEY).filter(|v| !v.is_empty()) {
            self.api_key = Some(v);
        }
        if let Some(v) = lookup(ENV_APP_KEY).filter(|v| !v.is_empty()) {
            self.app_key = Some(v);
        }
        if let Some(v) = lookup(ENV_API_HOST).filter(|v| !v.is_empty()) {
            self.api_host = v;
        }
        self
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if overrides.api_key.is_some() {
            self.api_key = overrides.api_key;
        }
        if overrides.app_key.is_some() {
            self.app_key = overrides.app_key;
        }
        if let Some(host) = overrides.api_host {
            self.api_host = host;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }

    /// Both keys, or a config error naming what is missing.
    pub fn require_credentials(&self) -> Result<(&str, &str)> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            DashError::Config(format!("missing api key (set {} or api_key)", ENV_API_KEY))
        })?;
        let app_key = self.app_key.as_deref().ok_or_else(|| {
            DashError::Config(format!(
                "missing application key (set {} or app_key)",
                ENV_APP_KEY
            ))
        })?;
        Ok((api_key, app_key))
    }
}

/// Where the config lives when no explicit path is given.
pub fn default_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "dashctl", "dashctl")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = DashConfig::default();
        assert_eq!(config.api_host, "https://app.datadoghq.com");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashConfig::load(dir.path()).unwrap();
        assert_eq!(config, DashConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"api_key": "abc", "app_key": "def", "api_host": "http://localhost:8080", "timeout_secs": 3}"#,
        )
        .unwrap();

        let loaded = DashConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded,
            DashConfig {
                api_key: Some("abc".into()),
                app_key: Some("def".into()),
                api_host: "http://localhost:8080".into(),
                timeout_secs: 3,
            }
        );
    }

    #[test]
    fn test_partial_file_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"api_key": "k"}"#).unwrap();

        let loaded = DashConfig::load_file(&path).unwrap();
        assert_eq!(loaded.api_key.as_deref(), Some("k"));
        assert_eq!(loaded.api_host, "https://app.datadoghq.com");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();

        let err = DashConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, DashError::Config(_)));
    }

    #[test]
    fn test_env_then_flags() {
        let env: HashMap<&str, &str> = [
            (ENV_API_KEY, "env-api"),
            (ENV_APP_KEY, "env-app"),
            (ENV_API_HOST, "http://localhost:8080"),
        ]
        .into_iter()
        .collect();

        let config = DashConfig::default()
            .with_env(|k| env.get(k).map(|v| v.to_string()))
            .with_overrides(ConfigOverrides {
                app_key: Some("flag-app".into()),
                timeout_secs: Some(3),
                ..ConfigOverrides::default()
            });

        assert_eq!(config.api_key.as_deref(), Some("env-api"));
        assert_eq!(config.app_key.as_deref(), Some("flag-app"));
        assert_eq!(config.api_host, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_require_credentials() {
        let config = DashConfig {
            api_key: Some("a".into()),
            ..DashConfig::default()
        };
        let err = config.require_credentials().unwrap_err();
        assert!(err.to_string().contains("application key"));

        let config = DashConfig {
            app_key: Some("b".into()),
            ..config
        };
        assert_eq!(config.require_credentials().unwrap(), ("a", "b"));
    }
}
