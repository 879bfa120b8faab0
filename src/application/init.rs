//! Initialize journal use case

use crate::application::EntryStore;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, LogRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new weekly log at the specified path.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    // Start with an explicit empty snapshot
    let store = EntryStore::open(repo.snapshot());
    store.save()?;

    info!(root = %path.display(), "Initialized weekly log");
    Ok(repo)
}
