use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::cli::Cli;

const DEFAULT_DATABASE_URL: &str = "sqlite://applications.db";
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is set but empty")]
    Empty(&'static str),
}

/// Application configuration loaded from environment variables
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Database connection URL
    /// Format: sqlite://PATH/TO/FILE.db
    pub database_url: String,

    /// Directory for the rolling log files
    /// Default: logs
    pub log_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - DATABASE_URL: SQLite connection string (default: sqlite://applications.db)
    /// - LOG_DIR: where log files are written (default: logs)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &'static str, default: &str| match lookup(key) {
            Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(key)),
            Some(value) => Ok(value.trim().to_string()),
            None => Ok(default.to_string()),
        };

        Ok(Config {
            database_url: read("DATABASE_URL", DEFAULT_DATABASE_URL)?,
            log_dir: PathBuf::from(read("LOG_DIR", DEFAULT_LOG_DIR)?),
        })
    }

    /// Command-line flags win over the environment
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(url) = &cli.database_url {
            self.database_url = url.clone();
        }
        if let Some(dir) = &cli.log_dir {
            self.log_dir = dir.clone();
        }
        self
    }
}
