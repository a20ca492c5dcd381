//! Config management use case

use crate::error::{CoachError, Result};
use crate::infrastructure::{CoachRepository, Config, FileSystemRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Config as stored, without range checks, so a bad value can be fixed here
    fn load(&self) -> Result<Config> {
        Config::load_unchecked(self.repository.root())
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;

        match key {
            "name" => Ok(config.name.clone()),
            "keyword_limit" => Ok(config.keyword_limit.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(CoachError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: name, keyword_limit, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.load()?;

        match key {
            "name" => {
                config.name = value.to_string();
            }
            "keyword_limit" => {
                config.keyword_limit = Config::parse_keyword_limit(value)?;
            }
            "created" => {
                return Err(CoachError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(CoachError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: name, keyword_limit",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        tracing::info!(key, value, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new(None)).unwrap();
        ConfigService::new(repo)
    }

    #[test]
    fn test_get_and_set() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("keyword_limit").unwrap(), "5");
        service.set("keyword_limit", "8").unwrap();
        assert_eq!(service.get("keyword_limit").unwrap(), "8");

        service.set("name", "Ada").unwrap();
        assert_eq!(service.get("name").unwrap(), "Ada");
        assert_eq!(service.list().unwrap().name, "Ada");
    }

    #[test]
    fn test_invalid_keyword_limit() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(matches!(
            service.set("keyword_limit", "0"),
            Err(CoachError::InvalidArgument(_))
        ));
        assert_eq!(service.get("keyword_limit").unwrap(), "5");
    }

    #[test]
    fn test_repair_zero_keyword_limit() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        let config_path = temp.path().join(".coach/config.toml");
        let contents = std::fs::read_to_string(&config_path)
            .unwrap()
            .replace("keyword_limit = 5", "keyword_limit = 0");
        std::fs::write(&config_path, contents).unwrap();

        assert!(service.repository.load_config().is_err());
        assert_eq!(service.get("keyword_limit").unwrap(), "0");
        assert_eq!(service.list().unwrap().keyword_limit, 0);

        service.set("keyword_limit", "5").unwrap();
        assert_eq!(service.repository.load_config().unwrap().keyword_limit, 5);
    }

    #[test]
    fn test_created_is_read_only() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.set("created", "2020-01-01T00:00:00Z").is_err());
        assert!(service.get("created").is_ok());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);
        assert!(service.get("mode").is_err());
        assert!(service.set("mode", "daily").is_err());
    }
}
