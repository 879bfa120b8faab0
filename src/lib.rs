//! weeklog - Weekly accomplishment log
//!
//! Records free-text notes against the Sunday-to-Saturday week they belong
//! to, keeps them in a local JSON snapshot and moves them in and out of CSV.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::WeeklogError;
