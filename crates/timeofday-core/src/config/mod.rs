//! Configuration module for the time-of-day session
//!
//! Supports YAML configuration files (see [`ConfigLoader`]) and programmatic
//! construction starting from [`ClockConfig::default`].

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;


use crate::errors::ClockError;
use std::path::Path;

/// Load a configuration from a YAML file
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<ClockConfig, ClockError> {
    ConfigLoader::from_file(path).await
}
