use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskify API",
        version = "0.1.0",
        description = "Create, read, update, complete, list and delete tasks"
    ),
    paths(crate::api::index),
    components(schemas(crate::api::IndexResponse)),
    nest(
        (path = "/tasks", api = domain_tasks::ApiDoc)
    )
)]
pub struct ApiDoc;
