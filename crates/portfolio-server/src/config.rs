//! # Server Configuration
//!
//! Environment-based configuration for the site service.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid SERVER_ADDR '{value}': {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("Invalid LOG_FORMAT '{0}': expected 'json' or 'pretty'")]
    InvalidLogFormat(String),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(ConfigError::InvalidLogFormat(s.to_string())),
        }
    }
}

/// Site server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub server_addr: SocketAddr,

    /// Root directory for static assets; logos live under `images/logos`
    pub assets_dir: PathBuf,

    /// Logging level
    pub log_level: String,

    pub log_format: LogFormat,

    /// CORS allowed origins
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `SERVER_ADDR` or `LOG_FORMAT` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `SERVER_ADDR` or `LOG_FORMAT` is malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());
        let server_addr = addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr { value: addr, source })?;

        let log_format = lookup("LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            server_addr,
            assets_dir: lookup("ASSETS_DIR")
                .map_or_else(|| PathBuf::from("public"), PathBuf::from),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            log_format,
            cors_origins: lookup("CORS_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        })
    }

    /// Directory served under `/images`
    #[must_use]
    pub fn images_dir(&self) -> PathBuf {
        self.assets_dir.join("images")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.server_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.assets_dir, PathBuf::from("public"));
        assert_eq!(config.images_dir(), PathBuf::from("public").join("images"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SERVER_ADDR", "127.0.0.1:3000"),
            ("ASSETS_DIR", "/srv/site"),
            ("LOG_FORMAT", "Pretty"),
            ("CORS_ORIGINS", "https://a.example, https://b.example"),
        ]))
        .unwrap();
        assert_eq!(config.server_addr.port(), 3000);
        assert_eq!(config.assets_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = Config::from_lookup(lookup(&[("SERVER_ADDR", "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAddr { .. }));

        let err = Config::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogFormat(_)));
    }
}
