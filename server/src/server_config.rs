use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use common::config::{ConfigContentProvider, ConfigManager, Validate};
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "server_config.yaml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_files_path: PathBuf,
    /// Sessions idle longer than this are dropped. `None` keeps every session
    /// for the lifetime of the process.
    pub session_idle_timeout_secs: Option<u64>,
    pub cleanup_interval_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            static_files_path: PathBuf::from("static"),
            session_idle_timeout_secs: None,
            cleanup_interval_secs: 300,
        }
    }
}

impl ServerConfig {
    pub fn session_idle_timeout(&self) -> Option<Duration> {
        self.session_idle_timeout_secs.map(Duration::from_secs)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

/// Loads the config; `bind` replaces the configured address before the
/// result is validated.
pub fn load_server_config<P: ConfigContentProvider>(
    manager: &ConfigManager<P, ServerConfig>,
    bind: Option<String>,
) -> Result<ServerConfig, String> {
    manager.get_config_with(|config| {
        if let Some(bind) = bind {
            config.bind_address = bind;
        }
    })
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        self.bind_address
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid bind address {}: {}", self.bind_address, e))?;
        if self.cleanup_interval_secs == 0 {
            return Err("cleanup_interval_secs must be positive".to_string());
        }
        if self.session_idle_timeout_secs == Some(0) {
            return Err("session_idle_timeout_secs must be positive when set".to_string());
        }
        Ok(())
    }
}
