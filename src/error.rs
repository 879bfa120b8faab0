//! Error types for weeklog

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for weeklog application
#[derive(Debug, Error)]
pub enum WeeklogError {
    #[error("Not a weeklog directory: {0}")]
    NotWeeklogDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Entry content cannot be empty")]
    EmptyContent,

    #[error("No logs to export.")]
    NothingToExport,

    #[error("Import failed: {0}")]
    ImportFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot serialization error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl WeeklogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WeeklogError::NotWeeklogDirectory(_) => 2,
            WeeklogError::InvalidDate(_) => 3,
            WeeklogError::NothingToExport => 4,
            WeeklogError::ImportFailed(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WeeklogError::NotWeeklogDirectory(path) => {
                format!(
                    "Not a weeklog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'weeklog init' in this directory to start a new log\n\
                    • Navigate to an existing weeklog directory\n\
                    • Set WEEKLOG_ROOT environment variable to your log path",
                    path.display()
                )
            }
            WeeklogError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Dates use the YYYY-MM-DD format (e.g., 2024-06-05)\n\n\
                    Examples:\n\
                    weeklog add \"Shipped the parser\" --date 2024-06-05\n\
                    weeklog week 2024-12-31",
                    input
                )
            }
            WeeklogError::EmptyContent => "Entry content cannot be empty\n\n\
                Write what you got done, e.g.: weeklog add \"Closed three tickets\""
                .to_string(),
            WeeklogError::NothingToExport => "No logs to export.\n\n\
                Record an entry first: weeklog add \"...\""
                .to_string(),
            WeeklogError::ImportFailed(msg) => {
                format!(
                    "Import failed: {}\n\n\
                    Please ensure the CSV format is correct.\n\
                    Expected columns: id,timestamp,weekRange,content",
                    msg
                )
            }
            WeeklogError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse .weeklog/config.toml: {}\n\n\
                    Inspect the file, or view settings with: weeklog config --list",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WeeklogError
pub type Result<T> = std::result::Result<T, WeeklogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_weeklog_directory_suggestion() {
        let err = WeeklogError::NotWeeklogDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("weeklog init"));
        assert!(msg.contains("WEEKLOG_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_date_examples() {
        let err = WeeklogError::InvalidDate("06/05/2024".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'06/05/2024'"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("Examples"));
    }

    #[test]
    fn test_import_failed_hint() {
        let err = WeeklogError::ImportFailed("stream did not contain valid UTF-8".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("CSV format is correct"));
        assert!(msg.contains("id,timestamp,weekRange,content"));
    }

    #[test]
    fn test_config_parse_error_names_file() {
        let err = WeeklogError::from(toml::from_str::<toml::Table>("created = ").unwrap_err());
        let msg = err.display_with_suggestions();
        assert!(msg.contains(".weeklog/config.toml"));
        assert!(msg.contains("weeklog config --list"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            WeeklogError::NotWeeklogDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(WeeklogError::InvalidDate(String::new()).exit_code(), 3);
        assert_eq!(WeeklogError::NothingToExport.exit_code(), 4);
        assert_eq!(WeeklogError::ImportFailed(String::new()).exit_code(), 5);
        assert_eq!(WeeklogError::EmptyContent.exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = WeeklogError::Config("bad key".to_string());
        let msg = err.display_with_suggestions();
        // Thiserror prefixes with the error type
        assert_eq!(msg, "Configuration error: bad key");
    }
}
