//! Snapshot slot holding the serialized entry collection

use crate::error::{Result, WeeklogError};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// A single key-value slot for the entry snapshot.
///
/// `read_snapshot` returns `Ok(None)` when nothing has been stored yet.
pub trait SnapshotStorage {
    fn read_snapshot(&self) -> Result<Option<String>>;

    /// Replace the stored snapshot
    fn write_snapshot(&self, contents: &str) -> Result<()>;
}

/// Snapshot stored in a file (`.weeklog/entries.json`)
#[derive(Debug, Clone)]
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    pub fn new(path: PathBuf) -> Self {
        FileSnapshot { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStorage for FileSnapshot {
    fn read_snapshot(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(WeeklogError::Io(e)),
        }
    }

    fn write_snapshot(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write next to the snapshot, then rename into place, so an
        // interrupted write never leaves a truncated snapshot behind
        let tmp_name = format!(
            "{}.weeklog-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        // On Windows, `rename` does not overwrite existing files
        #[cfg(windows)]
        {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
        }

        fs::rename(&tmp_path, &self.path).map_err(WeeklogError::Io)
    }
}

/// Snapshot kept in memory, for tests and embedding
#[derive(Debug, Default)]
pub struct MemorySnapshot {
    slot: RefCell<Option<String>>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: &str) -> Self {
        MemorySnapshot {
            slot: RefCell::new(Some(contents.to_string())),
        }
    }

    /// Current contents of the slot
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStorage for MemorySnapshot {
    fn read_snapshot(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write_snapshot(&self, contents: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}
