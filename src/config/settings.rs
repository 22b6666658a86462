//! TOML-based configuration for picklist.
//!
//! Supports a config file (picklist.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [database]
//! url = "${WAREHOUSE_DB}"
//!
//! [logging]
//! level = "info"
//!
//! [labels]
//! shelf = "Shelf"
//! additional_shelves = "also on"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::connection::{ConnectionConfig, ConnectionError};
use crate::report::Labels;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PICKLIST_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Order store settings.
    pub database: DatabaseSettings,

    /// Log output settings.
    pub logging: LoggingSettings,

    /// Wording used in the rendered sheet.
    pub labels: Labels,
}

/// Order store settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Connection string (supports ${ENV_VAR} expansion).
    pub url: Option<String>,
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive, e.g. "warn" or "picklist=debug".
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `PICKLIST_CONFIG`
    /// 2. `./picklist.toml`
    /// 3. `~/.config/picklist/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("picklist.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("picklist").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    /// Resolve the store connection.
    ///
    /// Precedence: explicit `url_override`, then `database.url` from the
    /// settings file, then the `DB_URL` environment variable.
    pub fn resolve_connection(
        &self,
        url_override: Option<&str>,
    ) -> Result<ConnectionConfig, SettingsError> {
        if let Some(url) = url_override {
            return Ok(ConnectionConfig::parse(url)?);
        }

        if let Some(url) = &self.database.url {
            let expanded = expand_env_vars(url)?;
            return Ok(ConnectionConfig::parse(&expanded)?);
        }

        Ok(ConnectionConfig::from_env()?)
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax. A lone `$` is kept as is.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let mut var_name = String::new();
        if chars.next_if_eq(&'{').is_some() {
            for ch in chars.by_ref() {
                if ch == '}' {
                    break;
                }
                var_name.push(ch);
            }
        } else {
            while let Some(ch) = chars.next_if(|ch| ch.is_alphanumeric() || *ch == '_') {
                var_name.push(ch);
            }
            if var_name.is_empty() {
                result.push('$');
                continue;
            }
        }

        let value = env::var(&var_name).map_err(|_| SettingsError::MissingEnvVar(var_name))?;
        result.push_str(&value);
    }

    Ok(result)
}
