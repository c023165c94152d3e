mod routes;

use axum::{
    Router,
    routing::{get, put},
};
use axum_helpers::ErrorPayload;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{Task, TaskInfo, TaskStatus};
use crate::repository::TaskRepository;
use crate::service::TaskService;

/// OpenAPI documentation for the Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(
        routes::list_tasks,
        routes::get_task,
        routes::create_task,
        routes::update_task,
        routes::update_task_status,
        routes::delete_task,
    ),
    components(
        schemas(Task, TaskInfo, TaskStatus, ErrorPayload)
    ),
    tags(
        (name = "tasks", description = "Task management")
    )
)]
pub struct TasksApiDoc;

/// Task routes, relative to the mount point (e.g. `/api/v1/tasks`)
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(routes::list_tasks).post(routes::create_task))
        .route(
            "/{id}",
            get(routes::get_task)
                .put(routes::update_task)
                .delete(routes::delete_task),
        )
        .route("/{id}/status", put(routes::update_task_status))
        .with_state(shared_service)
}
