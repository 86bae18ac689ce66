use crate::bounds::within;
use crate::{ConfigError, ConfigErrorResult};

use std::ops::RangeInclusive;

use serde::Deserialize;

/// Ports below this need privileges; 0 is still accepted and lets the OS pick
pub const MIN_PORT: u16 = 1024;
pub const MAX_BODY_BYTES: RangeInclusive<usize> = 1024..=10 * 1024 * 1024;

/// Listener and HTTP stack settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Serve the Prometheus scrape output at `/metrics`
    pub metrics_enabled: bool,
    /// Bodies above this are answered with 413
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            metrics_enabled: true,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        if (1..MIN_PORT).contains(&self.port) {
            return Err(ConfigError::server(format!(
                "server.port {} is privileged; use 0 or a port from {}",
                self.port, MIN_PORT
            )));
        }

        within("server.max_body_bytes", self.max_body_bytes, MAX_BODY_BYTES)
            .map_err(ConfigError::server)
    }
}
