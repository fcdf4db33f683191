//! Command implementations for the td CLI.
//!
//! This module contains the business logic for each subcommand. Every
//! command performs one load -> mutate -> save sequence against the
//! backing file and returns a typed result:
//! - `add` - append a new todo
//! - `list` - filtered read-only view
//! - `set_done` - flip the done flag (serves both `done` and `undone`)
//! - `delete` - remove a todo by id

use crate::Result;
use crate::models::{ListFilter, Todo};
use crate::store::Store;
use serde::Serialize;
use std::path::Path;

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output: Serialize {
    /// Serialize to a single-line JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Result of `td add`.
#[derive(Debug, Serialize)]
pub struct AddResult {
    pub id: u64,
    pub task: String,
}

impl Output for AddResult {
    fn to_human(&self) -> String {
        format!("Added TODO #{}: {}", self.id, self.task)
    }
}

/// Result of `td list`.
#[derive(Debug, Serialize)]
pub struct ListResult {
    pub count: usize,
    pub todos: Vec<Todo>,
}

impl Output for ListResult {
    fn to_human(&self) -> String {
        if self.todos.is_empty() {
            return "No TODOs found.".to_string();
        }

        self.todos
            .iter()
            .map(|t| {
                let mark = if t.done { 'x' } else { ' ' };
                format!("[{}] #{} {}", mark, t.id, t.task)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result of `td done` / `td undone`.
#[derive(Debug, Serialize)]
pub struct MarkResult {
    pub id: u64,
    pub done: bool,
}

impl Output for MarkResult {
    fn to_human(&self) -> String {
        let state = if self.done { "done" } else { "not done" };
        format!("Marked TODO #{} as {}.", self.id, state)
    }
}

/// Result of `td delete`.
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    pub id: u64,
}

impl Output for DeleteResult {
    fn to_human(&self) -> String {
        format!("Deleted TODO #{}.", self.id)
    }
}

/// Append a new todo and persist the store.
pub fn add(file: &Path, task: &str) -> Result<AddResult> {
    let mut store = Store::load(file)?;
    let todo = store.add(task)?;
    store.save()?;
    Ok(AddResult {
        id: todo.id,
        task: todo.task,
    })
}

/// Read-only filtered listing. Does not rewrite the backing file.
pub fn list(file: &Path, filter: ListFilter) -> Result<ListResult> {
    let store = Store::load(file)?;
    let todos: Vec<Todo> = store.list(filter).into_iter().cloned().collect();
    Ok(ListResult {
        count: todos.len(),
        todos,
    })
}

/// Set the done flag of an existing todo and persist the store.
pub fn set_done(file: &Path, id: u64, value: bool) -> Result<MarkResult> {
    let mut store = Store::load(file)?;
    store.set_done(id, value)?;
    store.save()?;
    Ok(MarkResult { id, done: value })
}

/// Delete a todo by id and persist the store.
pub fn delete(file: &Path, id: u64) -> Result<DeleteResult> {
    let mut store = Store::load(file)?;
    store.remove(id)?;
    store.save()?;
    Ok(DeleteResult { id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn file_in(dir: &TempDir) -> PathBuf {
        dir.path().join("todos.json")
    }

    #[test]
    fn test_add_persists_to_disk() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        let result = add(&file, "buy milk").unwrap();
        assert_eq!(result.id, 1);
        assert_eq!(result.task, "buy milk");

        let store = Store::load(&file).unwrap();
        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.find(1).unwrap().task, "buy milk");
    }

    #[test]
    fn test_add_empty_task_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        assert!(matches!(add(&file, "   "), Err(Error::InvalidInput(_))));
        assert!(!file.exists());
    }

    #[test]
    fn test_add_empty_task_preserves_existing_file() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        add(&file, "keep me").unwrap();
        let before = fs::read(&file).unwrap();

        assert!(add(&file, "").is_err());
        assert_eq!(fs::read(&file).unwrap(), before);
    }

    #[test]
    fn test_list_does_not_rewrite_file() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        add(&file, "a").unwrap();
        let before = fs::read(&file).unwrap();

        let result = list(&file, ListFilter::All).unwrap();
        assert_eq!(result.count, 1);
        assert_eq!(fs::read(&file).unwrap(), before);
    }

    #[test]
    fn test_set_done_unknown_id() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        assert!(matches!(
            set_done(&file, 9, true),
            Err(Error::NotFound(9))
        ));
    }

    #[test]
    fn test_delete_then_delete_again_fails() {
        let dir = TempDir::new().unwrap();
        let file = file_in(&dir);

        add(&file, "a").unwrap();
        delete(&file, 1).unwrap();
        assert!(matches!(delete(&file, 1), Err(Error::NotFound(1))));
    }

    #[test]
    fn test_human_renderings() {
        let added = AddResult {
            id: 1,
            task: "buy milk".to_string(),
        };
        assert_eq!(added.to_human(), "Added TODO #1: buy milk");

        let empty = ListResult {
            count: 0,
            todos: Vec::new(),
        };
        assert_eq!(empty.to_human(), "No TODOs found.");

        let mut done_todo = Todo::new(1, "buy milk".to_string());
        done_todo.done = true;
        let listing = ListResult {
            count: 2,
            todos: vec![done_todo, Todo::new(2, "call mom".to_string())],
        };
        assert_eq!(listing.to_human(), "[x] #1 buy milk\n[ ] #2 call mom");

        let marked = MarkResult { id: 3, done: false };
        assert_eq!(marked.to_human(), "Marked TODO #3 as not done.");

        let deleted = DeleteResult { id: 4 };
        assert_eq!(deleted.to_human(), "Deleted TODO #4.");
    }

    #[test]
    fn test_json_renderings() {
        let added = AddResult {
            id: 1,
            task: "buy milk".to_string(),
        };
        assert_eq!(added.to_json(), r#"{"id":1,"task":"buy milk"}"#);

        let marked = MarkResult { id: 2, done: true };
        assert_eq!(marked.to_json(), r#"{"id":2,"done":true}"#);
    }
}
