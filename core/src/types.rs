//! Domain DTOs for the todo API.
//!
//! # Design
//! `Todo` is the only resource. Its JSON shape is
//! `{"id": <integer>, "task": <string>, "completed": <bool>}` on the wire, in
//! both directions. `CreateTask` is the typed creation request: it keeps
//! `task` optional so that "field missing" and "field empty" can be reported
//! separately from "body is not JSON at all".

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Identifier assigned by the store. Always `>= 1`.
pub type TaskId = u64;

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TaskId,
    pub task: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
///
/// Unknown fields (including `completed`) are ignored; new todos always start
/// incomplete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
}

impl CreateTask {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: Some(task.into()),
        }
    }

    /// Extract the task text, rejecting a missing or blank value.
    pub fn into_task(self) -> Result<String, StoreError> {
        let task = self
            .task
            .ok_or_else(|| StoreError::InvalidInput("task is required".to_string()))?;
        validate_task(&task)?;
        Ok(task)
    }
}

/// A task description must contain at least one non-whitespace character.
pub fn validate_task(task: &str) -> Result<(), StoreError> {
    if task.trim().is_empty() {
        return Err(StoreError::InvalidInput("task must not be empty".to_string()));
    }
    Ok(())
}

pub const INVALID_TASK_ID: &str = "task id must be a positive integer";

/// Parse a raw `{id}` path segment.
///
/// Only plain decimal integers `>= 1` are accepted; signs, fractions and
/// surrounding whitespace are rejected.
pub fn parse_task_id(raw: &str) -> Result<TaskId, StoreError> {
    let invalid = || StoreError::InvalidInput(INVALID_TASK_ID.to_string());
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match raw.parse::<TaskId>() {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(id) => Ok(id),
    }
}
