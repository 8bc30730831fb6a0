use std::sync::Arc;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{
    CompleteTaskRequest, CreateTaskRequest, DeleteTaskRequest, GetTaskRequest, ListTasksRequest,
    Task, UpdateTaskRequest,
};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a task and return its id
    pub async fn create(&self, request: CreateTaskRequest) -> TaskResult<u64> {
        request.task.validate()?;

        self.repository.create(request.task.into()).await
    }

    pub async fn get_by_id(&self, request: GetTaskRequest) -> TaskResult<Task> {
        self.repository
            .get_by_id(request.id)
            .await?
            .map(Task::from)
            .ok_or(TaskError::NotFound(request.id))
    }

    pub async fn list(&self, request: ListTasksRequest) -> TaskResult<Vec<Task>> {
        let records = self.repository.list(request.limit).await?;
        Ok(records.into_iter().map(Task::from).collect())
    }

    /// Overwrite title and description; completion state is untouched
    pub async fn update(&self, request: UpdateTaskRequest) -> TaskResult<()> {
        request.task.validate()?;

        if !self
            .repository
            .update(request.id, request.task.into())
            .await?
        {
            return Err(TaskError::NotFound(request.id));
        }

        Ok(())
    }

    /// Complete a task and return it as stored afterwards
    pub async fn complete(&self, request: CompleteTaskRequest) -> TaskResult<Task> {
        if !self.repository.complete(request.id).await? {
            return Err(TaskError::NotFound(request.id));
        }

        self.get_by_id(GetTaskRequest { id: request.id }).await
    }

    pub async fn delete(&self, request: DeleteTaskRequest) -> TaskResult<()> {
        if !self.repository.delete(request.id).await? {
            return Err(TaskError::NotFound(request.id));
        }

        Ok(())
    }
}
