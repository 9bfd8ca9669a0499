use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Mutex;

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once through a content provider and caches it.
/// A provider with no content yields `TConfig::default()`.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        self.get_config_with(|_| {})
    }

    /// Same as `get_config`, but `overrides` runs on the freshly loaded config
    /// before it is validated. Only the first load applies overrides.
    pub fn get_config_with(&self, overrides: impl FnOnce(&mut TConfig)) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let mut config = match self.config_content_provider.get_config_content()? {
            Some(config_data) => self.config_serializer.deserialize(&config_data)?,
            None => TConfig::default(),
        };
        overrides(&mut config);
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryConfigProvider;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    #[serde(default)]
    struct SampleConfig {
        delay_ms: u64,
        title: String,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                delay_ms: 500,
                title: "Tic-Tac-Toe".to_string(),
            }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.delay_ms > 10_000 {
                return Err("delay_ms must not exceed 10000".to_string());
            }
            Ok(())
        }
    }

    type SampleManager = ConfigManager<MemoryConfigProvider, SampleConfig>;

    fn manager_with(content: Option<&str>) -> SampleManager {
        ConfigManager::new(
            MemoryConfigProvider::new(content.map(str::to_string)),
            YamlConfigSerializer::new(),
        )
    }

    #[test]
    fn test_missing_content_gives_default() {
        let manager = manager_with(None);
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let manager = manager_with(Some("delay_ms: 100\n"));
        let config = manager.get_config().unwrap();
        assert_eq!(config.delay_ms, 100);
        assert_eq!(config.title, "Tic-Tac-Toe");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let manager = manager_with(Some("delay_ms: 20000\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Config validation error"));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let manager = manager_with(Some("delay_ms: [not a number\n"));
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_override_applies_before_validation() {
        let manager = manager_with(Some("delay_ms: 20000\n"));
        let config = manager
            .get_config_with(|config| config.delay_ms = 250)
            .unwrap();
        assert_eq!(config.delay_ms, 250);

        let manager = manager_with(None);
        let err = manager
            .get_config_with(|config| config.delay_ms = 20_000)
            .unwrap_err();
        assert!(err.starts_with("Config validation error"));
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let manager = manager_with(Some("delay_ms: 100\n"));
        manager
            .get_config_with(|config| config.delay_ms = 200)
            .unwrap();
        assert_eq!(manager.get_config().unwrap().delay_ms, 200);
    }
}
