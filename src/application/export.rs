//! Export entries to a CSV file

use crate::application::entry_store::EntryStore;
use crate::domain::csv::encode_entries;
use crate::error::{Result, WeeklogError};
use crate::infrastructure::SnapshotStorage;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// `weekly-tracker-2024-06-05.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("weekly-tracker-{}.csv", date.format("%Y-%m-%d"))
}

/// Encode the whole collection. Fails when there is nothing to export.
pub fn export_csv<S: SnapshotStorage>(store: &EntryStore<S>) -> Result<String> {
    if store.is_empty() {
        return Err(WeeklogError::NothingToExport);
    }
    Ok(encode_entries(store.entries()))
}

/// Write the collection as CSV.
///
/// `destination` may be an existing directory (the dated default filename is
/// used inside it) or a file path. Returns the path written.
pub fn export_to_file<S: SnapshotStorage>(
    store: &EntryStore<S>,
    destination: &Path,
) -> Result<PathBuf> {
    if destination.is_dir() {
        return export_to_dir(store, destination);
    }

    let csv = export_csv(store)?;
    write_export(store, destination, &csv)
}

/// Write the collection as CSV under `dir` with the dated default filename,
/// creating `dir` when it does not exist yet.
pub fn export_to_dir<S: SnapshotStorage>(store: &EntryStore<S>, dir: &Path) -> Result<PathBuf> {
    let csv = export_csv(store)?;

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(export_filename(store.today()));
    write_export(store, &path, &csv)
}

fn write_export<S: SnapshotStorage>(
    store: &EntryStore<S>,
    path: &Path,
    csv: &str,
) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, csv)?;
    info!(path = %path.display(), count = store.len(), "Exported entries");
    Ok(path.to_path_buf())
}
