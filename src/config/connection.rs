//! Order store connection configuration.
//!
//! Supports configuration via environment variables:
//! - `DB_URL`: SQLite database path or URL (`sqlite://path`, `file:path`, `:memory:`)
//!
//! Variables may also come from a `.env` file (see [`load_dotenv`]); values
//! already set in the process environment win.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable holding the store connection string.
pub const DB_URL_ENV: &str = "DB_URL";

/// Error type for connection configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unsupported connection scheme: {0}. Supported: sqlite, file")]
    UnsupportedScheme(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Load a `.env` file from the working directory or one of its parents.
///
/// Returns the loaded path, or `None` when there is no `.env` file.
/// Variables already present in the environment are not overwritten.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConnectionError> {
    dotenv_outcome(dotenvy::dotenv())
}

/// Load a specific `.env` file. A missing file yields `None`.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, ConnectionError> {
    dotenv_outcome(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn dotenv_outcome(result: dotenvy::Result<PathBuf>) -> Result<Option<PathBuf>, ConnectionError> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Where the order store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// Transient in-memory database (tests, demos).
    Memory,
    /// Database file on disk, opened read-only.
    File(PathBuf),
}

/// Order store connection configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub location: StoreLocation,
}

impl ConnectionConfig {
    /// Connection to a database file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            location: StoreLocation::File(path.into()),
        }
    }

    /// Connection to a fresh in-memory database.
    pub fn memory() -> Self {
        Self {
            location: StoreLocation::Memory,
        }
    }

    /// Load configuration from the `DB_URL` environment variable.
    pub fn from_env() -> Result<Self, ConnectionError> {
        let url = env::var(DB_URL_ENV)
            .map_err(|_| ConnectionError::MissingEnvVar(DB_URL_ENV.to_string()))?;
        Self::parse(&url)
    }

    /// Parse a connection string.
    ///
    /// Accepted forms: `path/to/db.sqlite`, `sqlite://path`, `sqlite:path`,
    /// `file:path`, `:memory:` and `sqlite::memory:`.
    pub fn parse(url: &str) -> Result<Self, ConnectionError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ConnectionError::InvalidConfig(
                "empty connection string".to_string(),
            ));
        }

        let path = ["sqlite://", "sqlite:", "file:"]
            .iter()
            .find_map(|prefix| url.strip_prefix(prefix))
            .unwrap_or(url);

        if path == ":memory:" {
            return Ok(Self::memory());
        }

        if let Some((scheme, _)) = path.split_once("://") {
            return Err(ConnectionError::UnsupportedScheme(scheme.to_string()));
        }

        if path.is_empty() {
            return Err(ConnectionError::InvalidConfig(format!(
                "no database path in '{}'",
                url
            )));
        }

        Ok(Self::file(path))
    }

    /// Render the connection as a `sqlite:` URL, for diagnostics.
    pub fn to_connection_string(&self) -> String {
        match &self.location {
            StoreLocation::Memory => ":memory:".to_string(),
            StoreLocation::File(path) => format!("sqlite://{}", path.display()),
        }
    }
}
