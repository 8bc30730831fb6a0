use axum::{
    Extension, Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use axum_helpers::{IdPath, ValidatedJson};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::TaskResult;
use crate::models::{
    CompleteTaskRequest, CreateTaskRequest, DeleteTaskRequest, GetTaskRequest, ListTasksRequest,
    Task, TaskPayload, UpdateTaskRequest,
};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// Fixed page size of the collection route
pub const LIST_LIMIT: u64 = 10;

const TAG: &str = "tasks";

/// OpenAPI documentation for the Tasks API, paths relative to `/tasks`
#[derive(OpenApi)]
#[openapi(
    paths(
        list_tasks,
        create_task,
        get_task,
        update_task,
        complete_task,
        delete_task,
    ),
    components(schemas(Task, TaskPayload)),
    tags(
        (name = TAG, description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

type SharedService<R> = Arc<TaskService<R>>;

/// Create the task router with all HTTP endpoints
///
/// Every path is served with and without a trailing slash. Single-task routes
/// sit behind [`load_task`], so handlers only run for tasks that exist.
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    let collection: MethodRouter<SharedService<R>> =
        get(list_tasks::<R>).post(create_task::<R>);
    let single: MethodRouter<SharedService<R>> = get(get_task)
        .put(update_task::<R>)
        .post(complete_task::<R>)
        .delete(delete_task::<R>);

    let single_task_routes = Router::new()
        .route("/tasks/{id}", single.clone())
        .route("/tasks/{id}/", single)
        .route_layer(middleware::from_fn_with_state(
            shared_service.clone(),
            load_task::<R>,
        ));

    Router::new()
        .route("/tasks", collection.clone())
        .route("/tasks/", collection)
        .merge(single_task_routes)
        .with_state(shared_service)
}

/// Existence check for single-task routes
///
/// Rejects a malformed id with 400 and an unknown one with 404. Otherwise the
/// fetched [`Task`] travels to the handler as a request extension.
pub async fn load_task<R: TaskRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
    mut request: Request,
    next: Next,
) -> TaskResult<Response> {
    let task = service.get_by_id(GetTaskRequest { id }).await?;
    request.extensions_mut().insert(task);

    Ok(next.run(request).await)
}

/// List tasks, oldest first
#[utoipa::path(
    get,
    path = "/",
    tag = TAG,
    responses(
        (status = 200, description = "Up to 10 tasks", body = Vec<Task>),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<SharedService<R>>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = service.list(ListTasksRequest { limit: LIST_LIMIT }).await?;
    Ok(Json(tasks))
}

/// Create a task
#[utoipa::path(
    post,
    path = "/",
    tag = TAG,
    request_body = TaskPayload,
    responses(
        (status = 201, description = "Id of the new task", body = u64),
        (status = 400, description = "Malformed or invalid body", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<SharedService<R>>,
    ValidatedJson(task): ValidatedJson<TaskPayload>,
) -> TaskResult<impl IntoResponse> {
    let id = service.create(CreateTaskRequest { task }).await?;
    Ok((StatusCode::CREATED, Json(id)))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}/",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, description = "Invalid id", body = String, content_type = "text/plain"),
        (status = 404, description = "Task not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
async fn get_task(Extension(task): Extension<Task>) -> Json<Task> {
    Json(task)
}

/// Replace a task's title and description
#[utoipa::path(
    put,
    path = "/{id}/",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    request_body = TaskPayload,
    responses(
        (status = 204, description = "Task updated"),
        (status = 400, description = "Invalid id or body", body = String, content_type = "text/plain"),
        (status = 404, description = "Task not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
async fn update_task<R: TaskRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
    ValidatedJson(task): ValidatedJson<TaskPayload>,
) -> TaskResult<StatusCode> {
    service.update(UpdateTaskRequest { id, task }).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a task completed
#[utoipa::path(
    post,
    path = "/{id}/",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task after completion", body = Task),
        (status = 400, description = "Invalid id", body = String, content_type = "text/plain"),
        (status = 404, description = "Task not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
async fn complete_task<R: TaskRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
) -> TaskResult<Json<Task>> {
    let task = service.complete(CompleteTaskRequest { id }).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}/",
    tag = TAG,
    params(
        ("id" = u64, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, description = "Invalid id", body = String, content_type = "text/plain"),
        (status = 404, description = "Task not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Storage failure", body = String, content_type = "text/plain")
    )
)]
async fn delete_task<R: TaskRepository>(
    State(service): State<SharedService<R>>,
    IdPath(id): IdPath,
) -> TaskResult<StatusCode> {
    service.delete(DeleteTaskRequest { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
