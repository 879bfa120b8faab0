//! Weekly entry model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Week label used for imported rows that carry none.
pub const UNKNOWN_WEEK: &str = "Unknown Week";

/// One weekly accomplishment record.
///
/// Serialized field names (`id`, `timestamp`, `weekRange`, `content`) are the
/// snapshot format and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyEntry {
    pub id: String,
    /// Milliseconds since the Unix epoch, used only for ordering
    pub timestamp: i64,
    pub week_range: String,
    pub content: String,
}

impl WeeklyEntry {
    pub fn new(id: String, timestamp: i64, week_range: String, content: String) -> Self {
        WeeklyEntry {
            id,
            timestamp,
            week_range,
            content,
        }
    }

    /// True when the content has something other than whitespace
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Allocate a fresh entry id
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

/// Order entries newest first. Entries sharing a timestamp keep their
/// relative order.
pub fn sort_newest_first(entries: &mut [WeeklyEntry]) {
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}
