use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const TITLE_MAX_LEN: u64 = 255;
pub const DESCRIPTION_MAX_LEN: u64 = 1024;

/// Task as exposed by the service and the HTTP API
///
/// Unlike the older get/list payloads, this shape always includes
/// `created_on`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Storage-assigned identifier, never reused
    pub id: u64,
    pub title: String,
    pub description: String,
    pub created_on: DateTime<Utc>,
    pub completed: bool,
    /// Present once the task has been completed
    pub completed_on: Option<DateTime<Utc>>,
}

/// Body accepted by create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TaskPayload {
    #[validate(length(max = TITLE_MAX_LEN))]
    #[schema(max_length = 255)]
    pub title: String,

    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    #[schema(max_length = 1024)]
    pub description: String,
}

// Storage-facing shapes

/// A row as read back from storage.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub created_on: DateTime<Utc>,
    pub completed: bool,
    pub completed_on: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

/// Columns an update may overwrite. Completion state is not one of them.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskChanges {
    pub title: String,
    pub description: String,
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            created_on: record.created_on,
            completed: record.completed,
            completed_on: record.completed_on,
        }
    }
}

impl From<TaskPayload> for NewTask {
    fn from(payload: TaskPayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
        }
    }
}

impl From<TaskPayload> for TaskChanges {
    fn from(payload: TaskPayload) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
        }
    }
}

// Service requests, one per verb

#[derive(Debug, Clone)]
pub struct CreateTaskRequest {
    pub task: TaskPayload,
}

#[derive(Debug, Clone, Copy)]
pub struct GetTaskRequest {
    pub id: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct ListTasksRequest {
    pub limit: u64,
}

#[derive(Debug, Clone)]
pub struct UpdateTaskRequest {
    pub id: u64,
    pub task: TaskPayload,
}

#[derive(Debug, Clone, Copy)]
pub struct CompleteTaskRequest {
    pub id: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct DeleteTaskRequest {
    pub id: u64,
}
