//! Infrastructure layer - External I/O and persistence

pub mod clock;
pub mod config;
pub mod logging;
pub mod repository;
pub mod storage;

pub use clock::{Clock, FixedClock, SteppingClock, SystemClock};
pub use config::Config;
pub use repository::{FileSystemRepository, LogRepository};
pub use storage::{FileSnapshot, MemorySnapshot, SnapshotStorage};
