//! Domain layer - Entry model, week labels and the CSV codec

pub mod csv;
pub mod entry;
pub mod week_range;

pub use entry::{generate_id, sort_newest_first, WeeklyEntry, UNKNOWN_WEEK};
pub use week_range::{week_range, week_range_label};
