// src/config.rs

//! Client configuration: loading and validation.

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;

/// Connection settings for the client binary.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    6600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file. A missing file is not an
    /// error: unlike a server, the client runs fine on its defaults.
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read config file '{path}'"));
            }
        };
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file '{path}'"))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(anyhow!("host must not be empty"));
        }
        if self.port == 0 {
            return Err(anyhow!("port must not be 0"));
        }
        Ok(())
    }
}
