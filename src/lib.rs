//! Tally - a command-line TODO tracker backed by a single JSON file.
//!
//! This library provides the core functionality for the `td` CLI tool:
//! a flat-file store of todo items plus the command implementations
//! that operate on it.

pub mod cli;
pub mod commands;
pub mod models;
pub mod store;

use std::path::PathBuf;

/// Library-level error type for tally operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{} is invalid JSON", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("TODO #{0} not found")]
    NotFound(u64),
}

/// Result type alias for tally operations.
pub type Result<T> = std::result::Result<T, Error>;
