//! Configuration management

use crate::domain::keywords::DEFAULT_TOP_K;
use crate::error::{CoachError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory holding config and records, relative to the journal root
pub const COACH_DIR: &str = ".coach";

pub const DEFAULT_NAME: &str = "Coach User";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Profile name shown in greetings
    #[serde(default = "default_name")]
    pub name: String,
    /// Keywords kept per journal entry
    #[serde(default = "default_keyword_limit")]
    pub keyword_limit: usize,
    pub created: DateTime<Utc>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_keyword_limit() -> usize {
    DEFAULT_TOP_K
}

impl Config {
    /// Create a new config with default values
    pub fn new(name: Option<String>) -> Self {
        Config {
            name: name.unwrap_or_else(default_name),
            keyword_limit: DEFAULT_TOP_K,
            created: Utc::now(),
        }
    }

    /// Load config from .coach/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config = Self::load_unchecked(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config without range checks, so bad values can still be
    /// shown and repaired through `coach config`
    pub fn load_unchecked(path: &Path) -> Result<Self> {
        let config_path = path.join(COACH_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoachError::NotCoachDirectory(path.to_path_buf())
            } else {
                CoachError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| CoachError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .coach/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let coach_dir = path.join(COACH_DIR);
        let config_path = coach_dir.join("config.toml");

        if !coach_dir.exists() {
            fs::create_dir(&coach_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CoachError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Parse and check a keyword limit value
    pub fn parse_keyword_limit(value: &str) -> Result<usize> {
        let limit: usize = value.trim().parse().map_err(|_| {
            CoachError::InvalidArgument(format!(
                "keyword limit must be a positive integer, got '{}'",
                value
            ))
        })?;
        if limit == 0 {
            return Err(CoachError::InvalidArgument(
                "keyword limit must be at least 1".to_string(),
            ));
        }
        Ok(limit)
    }

    fn validate(&self) -> Result<()> {
        if self.keyword_limit == 0 {
            return Err(CoachError::InvalidArgument(
                "keyword limit in config.toml must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
