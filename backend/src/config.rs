//! Configuration management for the LGU Health ERP backend
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with LSM_ prefix

use chrono::NaiveDate;
use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{validate_thresholds, AlertThresholds};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Inventory snapshot provider
    pub source: SourceConfig,

    /// Database configuration, required by the postgres source only
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Alert thresholds
    #[serde(default)]
    pub monitoring: AlertThresholds,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

/// Which collaborator supplies inventory snapshots
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Mock,
    Http,
    Postgres,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    pub kind: SourceKind,

    /// Simulated latency of the mock source in milliseconds
    pub mock_latency_ms: u64,

    /// Pins the mock snapshot's expiry dates to this day instead of today
    #[serde(default)]
    pub mock_reference_date: Option<NaiveDate>,

    /// Base URL of the inventory API for the http source
    #[serde(default)]
    pub api_base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("LSM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("source.kind", "mock")?
            .set_default("source.mock_latency_ms", 300)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (LSM_ prefix)
            .add_source(
                Environment::with_prefix("LSM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field requirements that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_thresholds(&self.monitoring)
            .map_err(|e| ConfigError::Message(format!("monitoring: {}", e)))?;

        match self.source.kind {
            SourceKind::Http if self.source.api_base_url.is_none() => Err(ConfigError::Message(
                "source.api_base_url is required for the http source".to_string(),
            )),
            SourceKind::Postgres if self.database.is_none() => Err(ConfigError::Message(
                "database settings are required for the postgres source".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            source: SourceConfig::default(),
            database: None,
            monitoring: AlertThresholds::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Mock,
            mock_latency_ms: 300,
            mock_reference_date: None,
            api_base_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Config {
        Config {
            environment: "test".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_http_source_requires_base_url() {
        let mut config = base();
        config.source.kind = SourceKind::Http;
        assert!(config.validate().is_err());

        config.source.api_base_url = Some("http://inventory.local/api".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_postgres_source_requires_database() {
        let mut config = base();
        config.source.kind = SourceKind::Postgres;
        assert!(config.validate().is_err());

        config.database = Some(DatabaseConfig {
            url: "postgres://localhost/lgu".to_string(),
            max_connections: 5,
            min_connections: 1,
        });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_thresholds_rejected() {
        let mut config = base();
        config.monitoring.notice_days = 10;
        assert!(config.validate().is_err());
    }
}
