use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::TaskResult;
use crate::models::{NewTask, TaskChanges, TaskRecord};

/// Repository trait for Task persistence
///
/// Writes report whether a row matched instead of failing, leaving the
/// not-found decision to the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a task and return its new id
    async fn create(&self, input: NewTask) -> TaskResult<u64>;

    async fn get_by_id(&self, id: u64) -> TaskResult<Option<TaskRecord>>;

    /// Up to `limit` tasks, oldest first
    async fn list(&self, limit: u64) -> TaskResult<Vec<TaskRecord>>;

    /// Overwrite title and description
    async fn update(&self, id: u64, changes: TaskChanges) -> TaskResult<bool>;

    /// Mark a task completed as of now
    async fn complete(&self, id: u64) -> TaskResult<bool>;

    async fn delete(&self, id: u64) -> TaskResult<bool>;
}

#[derive(Default)]
struct Store {
    last_id: u64,
    tasks: BTreeMap<u64, TaskRecord>,
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryTaskRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, input: NewTask) -> TaskResult<u64> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let id = store.last_id;
        store.tasks.insert(
            id,
            TaskRecord {
                id,
                title: input.title,
                description: input.description,
                created_on: Utc::now(),
                completed: false,
                completed_on: None,
            },
        );

        tracing::info!(task_id = id, "Created task");
        Ok(id)
    }

    async fn get_by_id(&self, id: u64) -> TaskResult<Option<TaskRecord>> {
        let store = self.store.read().await;
        Ok(store.tasks.get(&id).cloned())
    }

    async fn list(&self, limit: u64) -> TaskResult<Vec<TaskRecord>> {
        let store = self.store.read().await;
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(store.tasks.values().take(limit).cloned().collect())
    }

    async fn update(&self, id: u64, changes: TaskChanges) -> TaskResult<bool> {
        let mut store = self.store.write().await;

        let Some(task) = store.tasks.get_mut(&id) else {
            return Ok(false);
        };
        task.title = changes.title;
        task.description = changes.description;

        tracing::info!(task_id = id, "Updated task");
        Ok(true)
    }

    async fn complete(&self, id: u64) -> TaskResult<bool> {
        let mut store = self.store.write().await;

        let Some(task) = store.tasks.get_mut(&id) else {
            return Ok(false);
        };
        task.completed = true;
        task.completed_on = Some(Utc::now());

        tracing::info!(task_id = id, "Completed task");
        Ok(true)
    }

    async fn delete(&self, id: u64) -> TaskResult<bool> {
        let mut store = self.store.write().await;

        let deleted = store.tasks.remove(&id).is_some();
        if deleted {
            tracing::info!(task_id = id, "Deleted task");
        }
        Ok(deleted)
    }
}
