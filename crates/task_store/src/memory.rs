//! In-memory task store implementation for testing.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Task, TaskStore, TaskStoreResult};

/// In-memory task store for testing purposes.
///
/// Ids are assigned from a counter that only moves forward, so a deleted
/// task's id is never handed out again.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    tasks: BTreeMap<i64, String>,
    last_id: i64,
}

impl MemoryTaskStore {
    /// Creates a new in-memory task store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn list_tasks(&self) -> TaskStoreResult<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner
            .tasks
            .iter()
            .map(|(&id, text)| Task::new(id, text.clone()))
            .collect())
    }

    async fn get_task(&self, id: i64) -> TaskStoreResult<Option<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.get(&id).map(|text| Task::new(id, text.clone())))
    }

    async fn insert_task(&self, text: &str) -> TaskStoreResult<Task> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.tasks.insert(id, text.to_string());
        Ok(Task::new(id, text))
    }

    async fn update_task(&self, id: i64, text: &str) -> TaskStoreResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(task) = inner.tasks.get_mut(&id) {
            *task = text.to_string();
        }
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> TaskStoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.tasks.remove(&id);
        Ok(())
    }
}
