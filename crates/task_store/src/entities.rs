//! Entity types for the task store.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single todo record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier, assigned by the datastore on insertion. Immutable.
    pub id: i64,
    /// Free-text description of what needs doing.
    pub task: String,
}

impl Task {
    /// Creates a task with a known id.
    pub fn new(id: i64, task: impl Into<String>) -> Self {
        Self {
            id,
            task: task.into(),
        }
    }
}
