//! CLI command definitions

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "weeklog")]
#[command(about = "Weekly accomplishment log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new weekly log
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record what you got done
    Add {
        /// Free-text accomplishments
        content: String,

        /// Any day of the week the entry is for, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Replace the content of an entry
    Edit {
        /// Entry id (shown by `weeklog list`)
        id: String,

        /// New content
        content: String,
    },

    /// Show entries, newest first
    List {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Export all entries as CSV
    Export {
        /// Output file or directory (default: configured export_dir, else current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import entries from a CSV file
    Import {
        /// CSV file with columns id,timestamp,weekRange,content
        file: PathBuf,
    },

    /// Show the Sunday-Saturday week for a date
    Week {
        /// Date in YYYY-MM-DD form (default: today)
        date: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
