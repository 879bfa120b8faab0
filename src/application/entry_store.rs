//! In-memory entry collection backed by a snapshot slot

use crate::domain::{generate_id, sort_newest_first, week_range_label, WeeklyEntry};
use crate::error::{Result, WeeklogError};
use crate::infrastructure::{Clock, SnapshotStorage, SystemClock};
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Outcome of merging imported entries
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Entries added to the collection
    pub added: usize,
    /// Candidates skipped because their id was already present
    pub duplicates: usize,
    /// Candidates skipped because their content was blank
    pub empty: usize,
}

/// Owns the entry collection, kept newest first.
///
/// Every mutation writes the whole collection back to storage, but only once
/// [`EntryStore::load`] has run, so an unloaded store never overwrites an
/// existing snapshot.
pub struct EntryStore<S> {
    storage: S,
    clock: Box<dyn Clock>,
    entries: Vec<WeeklyEntry>,
    loaded: bool,
}

impl<S: SnapshotStorage> EntryStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_clock(storage, SystemClock)
    }

    pub fn with_clock(storage: S, clock: impl Clock + 'static) -> Self {
        EntryStore {
            storage,
            clock: Box::new(clock),
            entries: Vec::new(),
            loaded: false,
        }
    }

    /// Create a store and load it in one step
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Read the snapshot into memory.
    ///
    /// A missing, unreadable or malformed snapshot leaves the collection
    /// empty; the failure is logged, never returned.
    pub fn load(&mut self) {
        self.entries = match self.storage.read_snapshot() {
            Ok(Some(contents)) => match serde_json::from_str::<Vec<WeeklyEntry>>(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(error = %e, "Stored entries are malformed, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No stored entries yet");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored entries, starting empty");
                Vec::new()
            }
        };

        sort_newest_first(&mut self.entries);
        self.loaded = true;
        debug!(count = self.entries.len(), "Loaded entries");
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Overwrite the snapshot with the current collection
    pub fn save(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.entries)?;
        self.storage.write_snapshot(&contents)?;
        debug!(count = self.entries.len(), "Saved entries");
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        if !self.loaded {
            debug!("Skipping save before the initial load");
            return Ok(());
        }
        self.save()
    }

    pub fn entries(&self) -> &[WeeklyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&WeeklyEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Record a new entry for the week containing `date` (`YYYY-MM-DD`).
    pub fn create(&mut self, content: &str, date: &str) -> Result<WeeklyEntry> {
        if content.trim().is_empty() {
            return Err(WeeklogError::EmptyContent);
        }

        let entry = WeeklyEntry::new(
            generate_id(),
            self.clock.now_millis(),
            week_range_label(date),
            content.to_string(),
        );

        self.entries.insert(0, entry.clone());
        sort_newest_first(&mut self.entries);
        self.persist()?;

        info!(id = %entry.id, week = %entry.week_range, "Created entry");
        Ok(entry)
    }

    /// Replace the content of an entry. Returns `false` when no entry has
    /// the given id.
    pub fn update(&mut self, id: &str, content: &str) -> Result<bool> {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            debug!(id, "No entry to update");
            return Ok(false);
        };

        entry.content = content.to_string();
        self.persist()?;

        info!(id, "Updated entry");
        Ok(true)
    }

    /// Add imported entries whose ids are not yet known.
    ///
    /// Blank candidates and ids already present (including earlier in the
    /// same batch) are skipped, so importing the same file twice changes
    /// nothing the second time.
    pub fn import_merge(&mut self, candidates: Vec<WeeklyEntry>) -> Result<ImportSummary> {
        let mut known: HashSet<String> = self.entries.iter().map(|e| e.id.clone()).collect();
        let mut summary = ImportSummary::default();
        let mut fresh = Vec::new();

        for candidate in candidates {
            if !candidate.has_content() {
                summary.empty += 1;
            } else if !known.insert(candidate.id.clone()) {
                summary.duplicates += 1;
            } else {
                fresh.push(candidate);
            }
        }

        summary.added = fresh.len();
        if fresh.is_empty() {
            debug!(?summary, "Import added nothing");
            return Ok(summary);
        }

        fresh.append(&mut self.entries);
        self.entries = fresh;
        sort_newest_first(&mut self.entries);
        self.persist()?;

        info!(
            added = summary.added,
            duplicates = summary.duplicates,
            empty = summary.empty,
            "Imported entries"
        );
        Ok(summary)
    }
}
