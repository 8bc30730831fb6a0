use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task {0} not found")]
    NotFound(u64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(id) => AppError::NotFound(format!("task {} not found", id)),
            TaskError::Validation(msg) => AppError::BadRequest(msg),
            TaskError::Database(msg) => AppError::Database(msg),
            TaskError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sea_orm::DbErr> for TaskError {
    fn from(err: sea_orm::DbErr) -> Self {
        TaskError::Database(err.to_string())
    }
}

impl From<ValidationErrors> for TaskError {
    fn from(err: ValidationErrors) -> Self {
        TaskError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (TaskError::NotFound(3), StatusCode::NOT_FOUND),
            (
                TaskError::Validation("title too long".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                TaskError::Database("database is locked".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                TaskError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_database_error_keeps_its_log_code() {
        let app_error: AppError = TaskError::Database("database is locked".into()).into();
        assert!(matches!(app_error, AppError::Database(msg) if msg == "database is locked"));
    }

    #[test]
    fn test_db_err_becomes_database_error() {
        let err: TaskError = sea_orm::DbErr::Custom("disk full".into()).into();
        assert!(matches!(err, TaskError::Database(msg) if msg.contains("disk full")));
    }
}
