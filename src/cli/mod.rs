//! CLI argument definitions for tally.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Full version string shown by `--version`, including build metadata
/// stamped by build.rs.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("TALLY_GIT_COMMIT"),
    ", built ",
    env!("TALLY_BUILD_TIMESTAMP"),
    ")"
);

/// Tally - track TODOs in a local JSON file.
#[derive(Parser, Debug)]
#[command(name = "td")]
#[command(author, version, long_version = LONG_VERSION)]
#[command(about = "A command-line TODO tracker backed by a single JSON file", long_about = None)]
pub struct Cli {
    /// Path to the backing JSON file.
    /// Can also be set via the TALLY_FILE environment variable.
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        env = "TALLY_FILE",
        default_value = "todos.json"
    )]
    pub file: PathBuf,

    /// Output in JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new TODO
    Add {
        /// Task text
        task: String,
    },

    /// List TODOs (pending only by default)
    List {
        /// Show all TODOs regardless of state
        #[arg(long)]
        all: bool,

        /// Show only done TODOs
        #[arg(long)]
        done: bool,
    },

    /// Mark a TODO as done
    Done {
        /// TODO id
        id: u64,
    },

    /// Mark a TODO as not done
    Undone {
        /// TODO id
        id: u64,
    },

    /// Delete a TODO
    Delete {
        /// TODO id
        id: u64,
    },
}
