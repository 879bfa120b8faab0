//! Configuration management

use crate::error::{Result, WeeklogError};
use crate::infrastructure::repository::{CONFIG_FILE, LOG_DIR};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,
    /// Directory for exported CSV files when no output path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            export_dir: None,
        }
    }

    /// Load config from .weeklog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(LOG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                WeeklogError::NotWeeklogDirectory(path.to_path_buf())
            } else {
                WeeklogError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .weeklog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let log_dir = path.join(LOG_DIR);
        let config_path = log_dir.join(CONFIG_FILE);

        if !log_dir.exists() {
            fs::create_dir(&log_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Directory exports land in: the configured one (relative paths resolve
    /// against the journal root) or the current directory.
    pub fn export_dir(&self, root: &Path) -> Result<PathBuf> {
        match &self.export_dir {
            Some(dir) if dir.is_absolute() => Ok(dir.clone()),
            Some(dir) => Ok(root.join(dir)),
            None => Ok(std::env::current_dir()?),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let config = Config {
            created: Utc::now(),
            export_dir: Some(PathBuf::from("exports")),
        };

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".weeklog").exists());
        assert!(temp.path().join(".weeklog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_config_omits_export_dir() {
        let temp = TempDir::new().unwrap();
        Config::new().save_to_dir(temp.path()).unwrap();

        let contents = fs::read_to_string(temp.path().join(".weeklog/config.toml")).unwrap();
        assert!(contents.contains("created"));
        assert!(!contents.contains("export_dir"));

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.export_dir, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            WeeklogError::NotWeeklogDirectory(_) => {}
            _ => panic!("Expected NotWeeklogDirectory error"),
        }
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".weeklog")).unwrap();
        fs::write(temp.path().join(".weeklog/config.toml"), "created = 12").unwrap();

        match Config::load_from_dir(temp.path()).unwrap_err() {
            WeeklogError::TomlDeserialize(_) => {}
            other => panic!("Expected TomlDeserialize error, got {:?}", other),
        }
    }

    #[test]
    fn test_export_dir_resolution() {
        let root = Path::new("/journal");
        let relative = Config {
            created: Utc::now(),
            export_dir: Some(PathBuf::from("out")),
        };
        assert_eq!(relative.export_dir(root).unwrap(), PathBuf::from("/journal/out"));

        let absolute = Config {
            created: Utc::now(),
            export_dir: Some(PathBuf::from("/tmp/out")),
        };
        assert_eq!(absolute.export_dir(root).unwrap(), PathBuf::from("/tmp/out"));
    }
}
