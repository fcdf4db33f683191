//! Data models for tally.
//!
//! This module defines the core data structures:
//! - `Todo` - One task record; its serde shape is the on-disk file shape
//! - `ListFilter` - Selection criterion for the `list` command

use serde::{Deserialize, Serialize};

/// A single tracked item.
///
/// The store file is a JSON array of these records, so the field names
/// here are the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned as max(existing ids) + 1, never reused
    pub id: u64,

    /// Task text (non-empty, surrounding whitespace trimmed)
    pub task: String,

    /// Completion flag
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    /// Create a new pending todo with the given id and task text.
    pub fn new(id: u64, task: String) -> Self {
        Self {
            id,
            task,
            done: false,
        }
    }
}

/// Which items the `list` command shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFilter {
    /// Every item regardless of state
    All,
    /// Only completed items
    DoneOnly,
    /// Only items still open (the default)
    #[default]
    PendingOnly,
}

impl ListFilter {
    /// Build a filter from the `--all`/`--done` CLI flags.
    ///
    /// `--all` wins when both flags are given; neither flag means
    /// pending-only.
    pub fn from_flags(all: bool, done: bool) -> Self {
        if all {
            Self::All
        } else if done {
            Self::DoneOnly
        } else {
            Self::PendingOnly
        }
    }

    /// Whether the given todo passes this filter.
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::DoneOnly => todo.done,
            Self::PendingOnly => !todo.done,
        }
    }
}
