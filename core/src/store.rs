//! In-memory todo store.
//!
//! # Design
//! The store owns the only copy of the collection behind an `RwLock`. Reads
//! clone out of a shared guard; `create` computes the next id and appends
//! under a single exclusive guard, so two concurrent creations can never
//! observe the same "next id". Nothing hands out references into the
//! collection, so all mutation goes through `create`.
//!
//! Guards are held only for the duration of a clone or a push and are never
//! held across an `.await`, which keeps a synchronous lock safe to use from
//! async handlers.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StoreError;
use crate::types::{validate_task, TaskId, Todo};

/// Ordered, append-only collection of todos.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All todos in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.read().clone()
    }

    pub fn get(&self, id: TaskId) -> Result<Todo, StoreError> {
        self.read()
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Append a new, incomplete todo and return it.
    ///
    /// The id is one greater than the current maximum, or `1` for an empty
    /// store.
    pub fn create(&self, task: &str) -> Result<Todo, StoreError> {
        validate_task(task)?;

        let mut todos = self.write();
        let id = todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
        let todo = Todo {
            id,
            task: task.to_string(),
            completed: false,
        };
        todos.push(todo.clone());
        Ok(todo)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the guard cannot leave the Vec half-written
    // (push is the only mutation), so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Todo>> {
        self.todos.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Todo>> {
        self.todos.write().unwrap_or_else(PoisonError::into_inner)
    }
}
