//! Configuration loading for Trialyx.
//! Reads trialyx.toml from the current directory or the path in the
//! TRIALYX_CONFIG env var. A missing file falls back to defaults (mock
//! mode still needs zero setup), with a warning.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// "live" fetches from the external registry; "mock" serves simulated
    /// payloads with no network.
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_mode() -> String { "live".to_string() }
fn default_base_url() -> String { "https://clinicaltrials.gov".to_string() }
fn default_timeout_secs() -> u64 { 30 }

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration from trialyx.toml.
    /// Checks TRIALYX_CONFIG env var first, then the current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("TRIALYX_CONFIG")
            .unwrap_or_else(|_| "trialyx.toml".to_string());

        if !Path::new(&path).exists() {
            warn!(path = %path, "Config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_the_live_registry() {
        let c = Config::default();
        assert_eq!(c.registry.mode, "live");
        assert_eq!(c.registry.base_url, "https://clinicaltrials.gov");
        assert_eq!(c.registry.timeout_secs, 30);
        assert_eq!(c.server.port, 3001);
    }

    #[test]
    fn partial_toml_fills_missing_fields() {
        let c: Config = toml::from_str(
            r#"
            [registry]
            mode = "mock"
            "#,
        )
        .unwrap();
        assert_eq!(c.registry.mode, "mock");
        assert_eq!(c.registry.timeout_secs, 30);
        assert_eq!(c.server.host, "127.0.0.1");
    }
}
