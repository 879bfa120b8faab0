//! Config management use case

use crate::error::{Result, WeeklogError};
use crate::infrastructure::{Config, FileSystemRepository, LogRepository};
use std::path::PathBuf;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "export_dir" => Ok(config
                .export_dir
                .map(|dir| dir.display().to_string())
                .unwrap_or_default()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(WeeklogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: export_dir, created",
                key
            ))),
        }
    }

    /// Set a config value. An empty `export_dir` clears it.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "export_dir" => {
                config.export_dir = match value.trim() {
                    "" => None,
                    dir => Some(PathBuf::from(dir)),
                };
            }
            "created" => {
                return Err(WeeklogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(WeeklogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: export_dir",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
