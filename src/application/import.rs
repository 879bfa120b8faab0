//! Import entries from a CSV file

use crate::application::entry_store::{EntryStore, ImportSummary};
use crate::domain::csv::parse_csv;
use crate::domain::{generate_id, WeeklyEntry, UNKNOWN_WEEK};
use crate::error::{Result, WeeklogError};
use crate::infrastructure::SnapshotStorage;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Rebuild entries from CSV text.
///
/// The header row is optional (detected by a first cell of `id`). Columns
/// are positional: id, timestamp, weekRange, content. Missing ids get a
/// fresh one, missing or unreadable timestamps become `now_millis`, missing
/// week labels become "Unknown Week". Blank rows are not filtered here.
pub fn decode_entries(text: &str, now_millis: i64) -> Vec<WeeklyEntry> {
    let rows = parse_csv(text);
    let skip = match rows.first() {
        Some(first) if first.first().map(String::as_str) == Some("id") => 1,
        _ => 0,
    };

    rows.into_iter()
        .skip(skip)
        .map(|row| {
            let cell = |index: usize| row.get(index).map(String::as_str).unwrap_or("");

            let id = match cell(0) {
                "" => generate_id(),
                id => id.to_string(),
            };
            let timestamp = parse_timestamp(cell(1)).unwrap_or(now_millis);
            let week_range = match cell(2) {
                "" => UNKNOWN_WEEK.to_string(),
                label => label.to_string(),
            };

            WeeklyEntry::new(id, timestamp, week_range, cell(3).to_string())
        })
        .collect()
}

/// Leading integer of a cell (`"1717286400000ms"` reads as 1717286400000).
/// Zero counts as missing.
fn parse_timestamp(cell: &str) -> Option<i64> {
    let trimmed = cell.trim_start();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let value = unsigned[..end].parse::<i64>().ok()?;
    let value = if negative { -value } else { value };

    (value != 0).then_some(value)
}

/// Read a CSV file and merge its entries into the store.
///
/// The whole file is read and decoded before the store is touched, so a
/// failed read leaves the collection unchanged.
pub fn import_file<S: SnapshotStorage>(
    store: &mut EntryStore<S>,
    path: &Path,
) -> Result<ImportSummary> {
    let bytes = fs::read(path).map_err(|e| {
        WeeklogError::ImportFailed(format!("could not read {}: {}", path.display(), e))
    })?;
    let text = String::from_utf8(bytes).map_err(|e| {
        WeeklogError::ImportFailed(format!("{} is not valid UTF-8: {}", path.display(), e))
    })?;

    // Spreadsheet exports often start with a byte order mark
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let candidates = decode_entries(text, store.now_millis());
    debug!(count = candidates.len(), path = %path.display(), "Decoded import rows");

    store.import_merge(candidates)
}
