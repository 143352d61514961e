//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::path::PathBuf;

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_LOG_FILTER, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};
use crate::models::Language;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalogue: CatalogueConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,
}

/// Catalogue configuration
#[derive(Debug, Clone)]
pub struct CatalogueConfig {
    /// Catalogue document on disk; the bundled catalogue is used when unset
    pub path: Option<PathBuf>,
    /// Language shown when a request names none, or names one that is missing
    pub default_language: Language,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            catalogue: CatalogueConfig::from_env()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                rust_log: DEFAULT_LOG_FILTER.to_string(),
                json_logs: false,
            },
            catalogue: CatalogueConfig {
                path: None,
                default_language: Language::Python,
            },
        }
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            json_logs: match env::var("LOG_FORMAT") {
                Ok(format) if format.eq_ignore_ascii_case("json") => true,
                Ok(format) if format.is_empty() || format.eq_ignore_ascii_case("text") => false,
                Ok(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
                Err(_) => false,
            },
        })
    }
}

impl CatalogueConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            path: env::var("CATALOGUE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            default_language: env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DEFAULT_LANGUAGE".to_string()))?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
