//! Application layer - Use cases and orchestration

pub mod entry_store;
pub mod export;
pub mod import;
pub mod init;
pub mod manage_config;

pub use entry_store::{EntryStore, ImportSummary};
pub use export::{export_csv, export_filename, export_to_dir, export_to_file};
pub use import::{decode_entries, import_file};
pub use manage_config::ConfigService;
