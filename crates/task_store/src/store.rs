//! Task store trait definition.

use async_trait::async_trait;

use crate::{Task, TaskStoreResult};

/// Trait for task storage operations.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Lists all tasks, ordered by id ascending.
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>>;

    /// Gets a task by id. An absent id yields `None`.
    async fn get_task(&self, id: i64) -> TaskStoreResult<Option<Task>>;

    /// Inserts a new task and returns it with its assigned id.
    async fn insert_task(&self, text: &str) -> TaskStoreResult<Task>;

    /// Updates a task's text. A silent no-op when the id does not exist.
    async fn update_task(&self, id: i64, text: &str) -> TaskStoreResult<()>;

    /// Deletes a task by id. A silent no-op when the id does not exist.
    async fn delete_task(&self, id: i64) -> TaskStoreResult<()>;
}
