use std::io::ErrorKind;
use std::path::PathBuf;

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }
}

/// Keeps the config text in memory. Handy for tests and for running without
/// a config file on disk.
#[derive(Default)]
pub struct MemoryConfigProvider {
    content: Option<String>,
}

impl MemoryConfigProvider {
    pub fn new(content: Option<String>) -> Self {
        Self { content }
    }
}

impl ConfigContentProvider for MemoryConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        Ok(self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentConfigProvider::new(get_temp_file_path());
        assert_eq!(provider.get_config_content(), Ok(None));
    }

    #[test]
    fn test_existing_file_is_read() {
        let path = get_temp_file_path();
        std::fs::write(&path, "bot_delay_ms: 250\n").unwrap();
        let provider = FileContentConfigProvider::new(path.clone());
        assert_eq!(
            provider.get_config_content().unwrap().as_deref(),
            Some("bot_delay_ms: 250\n")
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_memory_provider_returns_content() {
        assert_eq!(MemoryConfigProvider::default().get_config_content(), Ok(None));
        let provider = MemoryConfigProvider::new(Some("a: 1".to_string()));
        assert_eq!(provider.get_config_content(), Ok(Some("a: 1".to_string())));
    }
}
