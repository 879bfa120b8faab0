//! Output formatting utilities

use crate::application::ImportSummary;
use crate::domain::WeeklyEntry;

/// Format entries for display, newest first, with a count header
pub fn format_entry_list(entries: &[WeeklyEntry], total: usize) -> String {
    if total == 0 {
        return "No history yet. Record your first win with `weeklog add`.".to_string();
    }

    let mut output = format!("{} {}\n", total, if total == 1 { "log" } else { "logs" });
    for entry in entries {
        output.push('\n');
        output.push_str(&format!("{}  [{}]\n", entry.week_range, entry.id));
        for line in entry.content.lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }
    output
}

/// One-line summary of an import
pub fn format_import_summary(summary: &ImportSummary) -> String {
    let mut output = format!(
        "Imported {} {}",
        summary.added,
        if summary.added == 1 { "entry" } else { "entries" }
    );

    let mut skipped = Vec::new();
    if summary.duplicates > 0 {
        skipped.push(format!("{} already present", summary.duplicates));
    }
    if summary.empty > 0 {
        skipped.push(format!("{} empty", summary.empty));
    }
    if !skipped.is_empty() {
        output.push_str(&format!(" (skipped {})", skipped.join(", ")));
    }

    output
}
