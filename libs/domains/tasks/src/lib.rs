//! Tasks Domain
//!
//! A flat, single-table to-do list: create, read, update, complete, list and
//! delete tasks over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← Routes, id/body extraction, existence check
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, not-found decisions, row → Task
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SQLite / in-memory)
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{SqliteTaskRepository, TaskService, handlers};
//! use sea_orm::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite://tasks.db?mode=rwc").await?;
//!
//! let repository = SqliteTaskRepository::new(db);
//! repository.init_schema().await?;
//!
//! let app = handlers::router(TaskService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use models::{
    CompleteTaskRequest, CreateTaskRequest, DeleteTaskRequest, GetTaskRequest, ListTasksRequest,
    NewTask, Task, TaskChanges, TaskPayload, TaskRecord, UpdateTaskRequest,
};
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
pub use sqlite::SqliteTaskRepository;
