// Application configuration
//
// Loaded once at start-up: built-in defaults, then the TOML file, then
// environment variables. CLI flags are applied on top by the binary.

use crate::db::DEFAULT_HISTORY_CAPACITY;
use crate::i18n::Language;
use crate::song::{DEFAULT_MODEL, SUPPORTED_MODELS};
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "songcraft.db";

const ENV_CONFIG_PATH: &str = "SONGCRAFT_CONFIG";
const ENV_API_BASE: &str = "SONGCRAFT_API_BASE";
const ENV_DB_PATH: &str = "SONGCRAFT_DB_PATH";
const ENV_PORT: &str = "SONGCRAFT_PORT";
const ENV_LANGUAGE: &str = "SONGCRAFT_LANGUAGE";
const ENV_MODEL: &str = "SONGCRAFT_MODEL";
const ENV_LOG: &str = "SONGCRAFT_LOG";
const ENV_API_KEY: &str = "GEMINI_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
    #[error("unable to determine config directory")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Never logged.
    pub api_key: Option<String>,
    pub api_base: String,
    pub request_timeout: Duration,
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Bearer token required by the HTTP API. None leaves it open.
    pub auth_token: Option<String>,
    pub language: Language,
    pub model: String,
    pub history_capacity: usize,
    /// Where speech and album art files are written.
    pub output_dir: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        AppConfig {
            api_key: None,
            api_base: crate::ai::gemini_client::DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(120),
            db_path: data_dir.join(DB_FILE_NAME),
            host: "127.0.0.1".to_string(),
            port: 8484,
            auth_token: None,
            language: Language::En,
            model: DEFAULT_MODEL.to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            output_dir: data_dir.join("output"),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PartialConfig {
    api_key: Option<String>,
    api_base: Option<String>,
    request_timeout_secs: Option<u64>,
    db_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    auth_token: Option<String>,
    language: Option<Language>,
    model: Option<String>,
    history_capacity: Option<usize>,
    output_dir: Option<PathBuf>,
    log_level: Option<String>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Songcraft", "Songcraft")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl AppConfig {
    /// Defaults, then the config file, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = match env::var_os(ENV_CONFIG_PATH).filter(|v| !v.is_empty()) {
            Some(value) => {
                let path = PathBuf::from(value);
                if path.is_dir() {
                    path.join(CONFIG_FILE_NAME)
                } else {
                    path
                }
            }
            None => Self::default_config_path()?,
        };
        if path.exists() {
            config.apply_file(&path)?;
            tracing::debug!(path = %path.display(), "Loaded config file");
        }

        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let dirs = project_dirs().ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.apply_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_toml(&mut self, contents: &str) -> Result<(), toml::de::Error> {
        let partial: PartialConfig = toml::from_str(contents)?;
        if let Some(key) = non_empty(partial.api_key) {
            self.api_key = Some(key);
        }
        if let Some(base) = partial.api_base {
            self.api_base = base;
        }
        if let Some(secs) = partial.request_timeout_secs {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(path) = partial.db_path {
            self.db_path = path;
        }
        if let Some(host) = partial.host {
            self.host = host;
        }
        if let Some(port) = partial.port {
            self.port = port;
        }
        if let Some(token) = non_empty(partial.auth_token) {
            self.auth_token = Some(token);
        }
        if let Some(language) = partial.language {
            self.language = language;
        }
        if let Some(model) = partial.model {
            self.model = model;
        }
        if let Some(capacity) = partial.history_capacity {
            self.history_capacity = capacity;
        }
        if let Some(dir) = partial.output_dir {
            self.output_dir = dir;
        }
        if let Some(level) = partial.log_level {
            self.log_level = level;
        }
        Ok(())
    }

    /// Apply overrides from `lookup` (the process environment in production).
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = non_empty(lookup(ENV_API_KEY)) {
            self.api_key = Some(value.trim().to_string());
        }
        if let Some(value) = non_empty(lookup(ENV_API_BASE)) {
            self.api_base = value;
        }
        if let Some(value) = non_empty(lookup(ENV_DB_PATH)) {
            self.db_path = PathBuf::from(value);
        }
        if let Some(value) = non_empty(lookup(ENV_PORT)) {
            self.port = value.trim().parse().map_err(|_| ConfigError::Invalid {
                key: ENV_PORT,
                message: format!("'{}' is not a port number", value),
            })?;
        }
        if let Some(value) = non_empty(lookup(ENV_LANGUAGE)) {
            self.language = value
                .parse()
                .map_err(|message| ConfigError::Invalid { key: ENV_LANGUAGE, message })?;
        }
        if let Some(value) = non_empty(lookup(ENV_MODEL)) {
            self.model = value;
        }
        if let Some(value) = non_empty(lookup(ENV_LOG)) {
            self.log_level = value;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !SUPPORTED_MODELS.contains(&self.model.as_str()) {
            return Err(ConfigError::Invalid {
                key: "model",
                message: format!(
                    "'{}' is not supported. Supported: {}",
                    self.model,
                    SUPPORTED_MODELS.join(", ")
                ),
            });
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "history_capacity",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.history_capacity, 30);
        assert_eq!(config.language, Language::En);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let mut config = AppConfig::default();
        config
            .apply_toml(
                r#"
                port = 9000
                language = "th"
                model = "gemini-2.5-flash"
                history_capacity = 5
                request_timeout_secs = 30
                auth_token = ""
                "#,
            )
            .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.language, Language::Th);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.auth_token, None);
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "language = \"ja\"\nport = 9000\n").unwrap();

        let mut config = AppConfig::default();
        config.apply_file(&path).unwrap();
        config
            .apply_env(lookup(&[
                ("SONGCRAFT_LANGUAGE", "ko"),
                ("GEMINI_API_KEY", " AIza-test "),
                ("SONGCRAFT_MODEL", ""),
            ]))
            .unwrap();

        assert_eq!(config.language, Language::Ko);
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_key.as_deref(), Some("AIza-test"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_invalid_values() {
        let mut config = AppConfig::default();
        assert!(matches!(
            config.apply_env(lookup(&[("SONGCRAFT_PORT", "http")])),
            Err(ConfigError::Invalid { key: "SONGCRAFT_PORT", .. })
        ));
        assert!(config.apply_env(lookup(&[("SONGCRAFT_LANGUAGE", "fr")])).is_err());

        config.model = "gpt-4".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.history_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unparseable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "port = \"not a number\"").unwrap();

        let mut config = AppConfig::default();
        assert!(matches!(config.apply_file(&path), Err(ConfigError::Parse { .. })));
    }
}
