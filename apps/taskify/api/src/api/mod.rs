use axum::{Json, Router, routing::get};
use database::sqlite::DatabaseConnection;
use domain_tasks::{TaskRepository, TaskService, handlers};
use serde::Serialize;
use utoipa::ToSchema;

pub mod health;

#[derive(Serialize, ToSchema)]
pub struct IndexResponse {
    pub title: &'static str,
}

/// Static greeting, doubles as a liveness probe
#[utoipa::path(
    get,
    path = "/",
    tag = "index",
    responses(
        (status = 200, description = "Service name", body = IndexResponse)
    )
)]
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse { title: "Taskify" })
}

/// All application routes with state applied.
pub fn routes<R: TaskRepository + 'static>(repository: R) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(handlers::router(TaskService::new(repository)))
}

/// Creates a router with the /ready endpoint backed by a real SQLite check.
pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_tasks::InMemoryTaskRepository;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_index_returns_title() {
        let app = routes(InMemoryTaskRepository::new());

        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Taskify" }));
    }

    #[tokio::test]
    async fn test_ready_with_live_database() {
        let db = database::sqlite::connect("sqlite::memory:").await.unwrap();
        let app = ready_router(db);

        let response = app
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_after_close_is_unavailable() {
        let db = database::sqlite::connect("sqlite::memory:").await.unwrap();
        let app = ready_router(db.clone());
        db.close().await.unwrap();

        let response = app
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_openapi_document_lists_task_routes() {
        use utoipa::OpenApi;

        let doc = crate::openapi::ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/"));
        assert!(paths.iter().any(|p| p.starts_with("/tasks")));
        assert!(paths.iter().any(|p| p.as_str() == "/tasks/{id}/"));
    }
}
