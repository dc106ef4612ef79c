//! Configuration management
//!
//! TOML configuration with serde-backed defaults. The server binary resolves
//! the file in this order:
//!
//! 1. `HR_CONFIG` environment variable (path to a TOML file)
//! 2. `./attrition.toml` in the current directory
//! 3. Built-in defaults
//!
//! Every field has a default, so a partial file only needs to name what it
//! overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Dataset source configuration
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Monitoring and observability
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Allowed CORS origins; empty means allow any origin
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

/// Dataset source configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// Path to the employee CSV file
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,
}

/// Monitoring configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitoringConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data.csv")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            dataset: DatasetConfig::default(),
            monitoring: MonitoringConfig::default(),
        }
    }
}

impl Config {
    /// Parse a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::Configuration(format!(
                "cannot read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&raw)
            .map_err(|e| Error::Configuration(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration from the environment, falling back to defaults
    pub fn resolve() -> Result<Self, Error> {
        if let Ok(path) = std::env::var("HR_CONFIG") {
            return Self::from_file(path);
        }
        let local = Path::new("attrition.toml");
        if local.exists() {
            return Self::from_file(local);
        }
        Ok(Self::default())
    }

    /// Check field-level invariants
    pub fn validate(&self) -> Result<(), Error> {
        if self.server.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(Error::Configuration(format!(
                "listen_addr '{}' is not a valid socket address",
                self.server.listen_addr
            )));
        }
        if self.dataset.path.as_os_str().is_empty() {
            return Err(Error::Configuration("dataset path is empty".to_string()));
        }
        Ok(())
    }
}
