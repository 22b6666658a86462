//! Configuration module for picklist.
//!
//! Handles store connection configuration, environment variables, and settings.

mod connection;
mod settings;

pub use connection::{
    load_dotenv, load_dotenv_from, ConnectionConfig, ConnectionError, StoreLocation, DB_URL_ENV,
};
pub use settings::{
    expand_env_vars, DatabaseSettings, LoggingSettings, Settings, SettingsError, CONFIG_ENV,
};
