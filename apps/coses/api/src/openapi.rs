use axum_helpers::server::HealthResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorPayload, HealthResponse)
    ),
    info(
        title = "Coses API",
        version = "0.1.0",
        description = "Task management API"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/v1/tasks", api = domain_tasks::TasksApiDoc)
    )
)]
pub struct ApiDoc;
