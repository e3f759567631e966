//! Runtime configuration, loaded from a YAML file at startup.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Simulated latency applied to every facade call, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Time allowed for each dashboard dataset fetch, in milliseconds.
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// File holding the serialized session user between runs.
    #[serde(default = "default_session_path")]
    pub path: String,
}

fn default_latency_ms() -> u64 {
    500
}

fn default_fetch_timeout_ms() -> u64 {
    5000
}

fn default_session_path() -> String {
    "./data/session.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            latency_ms: default_latency_ms(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            path: default_session_path(),
        }
    }
}

impl DataConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let config = serde_yaml::from_str(&contents)?;
    Ok(config)
}
