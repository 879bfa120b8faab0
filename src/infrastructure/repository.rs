//! File system repository

use crate::error::{Result, WeeklogError};
use crate::infrastructure::{Config, FileSnapshot};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory marking a journal root
pub const LOG_DIR: &str = ".weeklog";
pub const CONFIG_FILE: &str = "config.toml";
pub const SNAPSHOT_FILE: &str = "entries.json";

/// Environment variable pointing at a journal root
pub const ROOT_ENV: &str = "WEEKLOG_ROOT";

/// Abstract repository for journal operations
pub trait LogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .weeklog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .weeklog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .weeklog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .weeklog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of LogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks WEEKLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_log_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(WeeklogError::Config(format!(
                    "{} is set to '{}' but no {} directory found. \
                    Run 'weeklog init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    LOG_DIR,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_log_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(WeeklogError::NotWeeklogDirectory(start.to_path_buf())),
            }
        }
    }

    /// Snapshot slot for this journal's entries
    pub fn snapshot(&self) -> FileSnapshot {
        FileSnapshot::new(self.root.join(LOG_DIR).join(SNAPSHOT_FILE))
    }

    fn has_log_dir(path: &Path) -> bool {
        path.join(LOG_DIR).is_dir()
    }
}

impl LogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_log_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let log_dir = self.root.join(LOG_DIR);

        if log_dir.exists() {
            return Err(WeeklogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&log_dir)?;
        Ok(())
    }
}
