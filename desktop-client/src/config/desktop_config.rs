use std::path::PathBuf;
use std::time::Duration;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = "tictactoe_desktop_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, DesktopConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Pause before the bot answers a move.
    pub bot_delay_ms: u64,
    pub celebration_particles: usize,
    pub celebration_frames: u32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            bot_delay_ms: 500,
            celebration_particles: 50,
            celebration_frames: 180,
        }
    }
}

impl DesktopConfig {
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

impl Validate for DesktopConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > 5_000 {
            return Err("bot_delay_ms must not exceed 5000".to_string());
        }
        if self.celebration_particles > 500 {
            return Err("celebration_particles must not exceed 500".to_string());
        }
        if self.celebration_frames > 600 {
            return Err("celebration_frames must not exceed 600".to_string());
        }
        Ok(())
    }
}
