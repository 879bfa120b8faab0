//! CSV codec for entry export and import
//!
//! The dialect is deliberately small: cells are separated by `,`, rows by
//! `\n`, `\r\n` or a lone `\r`, and double quotes switch a quoted mode in
//! which separators are literal and `""` stands for one quote character.
//!
//! A quote appearing in the middle of an unquoted cell still switches to
//! quoted mode, so `ab"c,d"e` reads as the single cell `abc,de`. Files written
//! by [`encode_entries`] never contain such cells.

use crate::domain::WeeklyEntry;

/// Column names of the export header row
pub const CSV_HEADER: [&str; 4] = ["id", "timestamp", "weekRange", "content"];

/// Decode CSV text into rows of cells.
///
/// Blank lines between rows are skipped. A trailing row without a line
/// terminator is always kept.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    cell.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => cell.push(ch),
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut cell)),
            '\r' | '\n' => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut cell));
                if is_blank_row(&row) {
                    row.clear();
                } else {
                    rows.push(std::mem::take(&mut row));
                }
            }
            _ => cell.push(ch),
        }
    }

    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows
}

/// A row holding a single empty cell comes from an empty line
fn is_blank_row(row: &[String]) -> bool {
    matches!(row, [only] if only.is_empty())
}

/// Wrap a field in double quotes, doubling any quote inside it
pub fn quote_field(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Encode entries as CSV with a header row, in the order given.
pub fn encode_entries(entries: &[WeeklyEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for entry in entries {
        lines.push(format!(
            "{},{},{},{}",
            entry.id,
            entry.timestamp,
            quote_field(&entry.week_range),
            quote_field(&entry.content)
        ));
    }

    lines.join("\n")
}
