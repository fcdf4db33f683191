//! Storage layer for tally data.
//!
//! The store is one JSON file holding the full array of todos. Each CLI
//! invocation loads the file into memory, mutates the in-memory sequence,
//! and writes the whole file back. Mutators here are pure on the in-memory
//! list; persistence happens only through [`Store::save`].

use crate::models::{ListFilter, Todo};
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// In-memory store for a single backing file.
pub struct Store {
    /// Backing file for this store's data
    path: PathBuf,
    /// Todos in insertion order
    todos: Vec<Todo>,
}

impl Store {
    /// Load the store from the given path.
    ///
    /// A missing file is an empty store. A file that exists but does not
    /// parse as a JSON array of todos is fatal.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            return Ok(Self {
                path,
                todos: Vec::new(),
            });
        }

        let contents = fs::read_to_string(&path)?;
        let todos = serde_json::from_str(&contents).map_err(|source| Error::Parse {
            path: path.clone(),
            source,
        })?;

        Ok(Self { path, todos })
    }

    /// Write the full todo list back to the backing file, pretty-printed
    /// with 2-space indentation.
    pub fn save(&self) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(&self.todos)?;
        contents.push('\n');
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Next id to assign: 1 for an empty store, else max existing id + 1.
    pub fn next_id(&self) -> u64 {
        self.todos.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    /// Append a new pending todo with a freshly assigned id.
    ///
    /// Surrounding whitespace is trimmed from the task text; an empty
    /// result is rejected without touching the list.
    pub fn add(&mut self, task: &str) -> Result<Todo> {
        let task = task.trim();
        if task.is_empty() {
            return Err(Error::InvalidInput("task cannot be empty".to_string()));
        }

        let todo = Todo::new(self.next_id(), task.to_string());
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Look up a todo by id.
    pub fn find(&self, id: u64) -> Result<&Todo> {
        self.todos
            .iter()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound(id))
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut Todo> {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Set the done flag of an existing todo.
    pub fn set_done(&mut self, id: u64, value: bool) -> Result<()> {
        self.find_mut(id)?.done = value;
        Ok(())
    }

    /// Remove a todo by id, returning the removed record.
    pub fn remove(&mut self, id: u64) -> Result<Todo> {
        let index = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or(Error::NotFound(id))?;
        Ok(self.todos.remove(index))
    }

    /// Todos passing the given filter, in insertion order.
    pub fn list(&self, filter: ListFilter) -> Vec<&Todo> {
        self.todos.iter().filter(|t| filter.matches(t)).collect()
    }

    /// All todos in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
