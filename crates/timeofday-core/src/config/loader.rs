//! Configuration loader for YAML files
//!
//! Files are read with `tokio::fs` and parsed with `serde_yaml`; every loaded
//! configuration is validated before it is handed out.

use crate::config::types::*;
use crate::errors::ClockError;
use std::path::Path;
use tokio::fs;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "timeofday.yaml";

pub struct ConfigLoader;
impl ConfigLoader {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<ClockConfig, ClockError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            ClockError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        log::debug!("Read {} bytes of configuration from {}", content.len(), path.display());
        Self::from_str(&content)
    }

    /// Load configuration from `path` when it exists, otherwise fall back to
    /// the built-in defaults.
    pub async fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<ClockConfig, ClockError> {
        let path = path.as_ref();
        let exists = fs::try_exists(path).await.map_err(|e| {
            ClockError::ConfigError(format!(
                "Failed to check for config file {}: {}",
                path.display(),
                e
            ))
        })?;
        if exists {
            log::info!("Loading configuration from file: {}", path.display());
            Self::from_file(path).await
        } else {
            log::info!(
                "No configuration file at {}, using defaults",
                path.display()
            );
            Ok(ClockConfig::default())
        }
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<ClockConfig, ClockError> {
        // An empty document deserializes to unit, not to an all-default map.
        let config: ClockConfig = if content.trim().is_empty() {
            ClockConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| {
                ClockError::ConfigError(format!("Failed to parse YAML config: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }
}
