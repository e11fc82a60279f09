//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::EchoConfig;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<EchoConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: EchoConfig = toml::from_str(&content)?;
    Ok(config)
}
