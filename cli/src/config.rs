//! Configuration

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use thunderpush_client::{
    config::{DEFAULT_HOSTNAME, DEFAULT_PORT},
    ClientConfig,
};

/// Configuration file
///
/// Every value can be overridden on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hostname of service
    pub host: Option<String>,
    /// Port of service
    pub port: Option<u16>,
    /// Key for service
    pub key: Option<String>,
    /// Secret key for service
    pub secret: Option<String>,
}

impl Config {
    /// Returns the default config path
    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("Thunderpush/config.toml"))
    }

    /// Loads the config file
    ///
    /// Without an explicit path, a missing default file yields an empty config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Reads and parses a config file
    fn read(path: &Path) -> Result<Self> {
        let cfg_str = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.to_string_lossy()))?;
        let cfg = toml::from_str::<Config>(&cfg_str)
            .with_context(|| format!("invalid config file {}", path.to_string_lossy()))?;
        tracing::debug!(path = %path.to_string_lossy(), "config loaded");
        Ok(cfg)
    }

    /// Returns the client config, command line values first
    pub fn client_config(self, overrides: Config) -> ClientConfig {
        ClientConfig {
            hostname: overrides
                .host
                .or(self.host)
                .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
            port: overrides.port.or(self.port).unwrap_or(DEFAULT_PORT),
            key: overrides.key.or(self.key).unwrap_or_default(),
            secret: overrides.secret.or(self.secret).unwrap_or_default(),
        }
    }
}
