use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{ErrorPayload, JsonBody, QueryParams, UuidPath};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::TaskResult;
use crate::models::{Task, TaskFilter, TaskInfo, TaskStatus};
use crate::repository::TaskRepository;
use crate::service::TaskService;

type SharedService<R> = State<Arc<TaskService<R>>>;

/// 200 with the task, or 404 with an empty body
fn found_or_404(task: Option<Task>) -> Response {
    match task {
        Some(task) => Json(task).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// List tasks, optionally only those with the given completion flag
#[utoipa::path(
    get,
    path = "",
    tag = "tasks",
    params(TaskFilter),
    responses(
        (status = 200, description = "List of tasks", body = Vec<Task>),
        (status = 400, description = "Invalid filter", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub async fn list_tasks<R: TaskRepository>(
    State(service): SharedService<R>,
    QueryParams(filter): QueryParams<TaskFilter>,
) -> TaskResult<Json<Vec<Task>>> {
    let tasks = match filter.completed {
        Some(completed) => service.find_all_by_completed(completed).await?,
        None => service.find_all().await?,
    };
    Ok(Json(tasks))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, description = "Invalid task ID", body = ErrorPayload),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub async fn get_task<R: TaskRepository>(
    State(service): SharedService<R>,
    UuidPath(id): UuidPath,
) -> TaskResult<Response> {
    Ok(found_or_404(service.find_by_id(id).await?))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = "tasks",
    request_body = TaskInfo,
    responses(
        (status = 200, description = "Task created", body = Task),
        (status = 400, description = "Invalid request", body = ErrorPayload),
        (status = 415, description = "Body is not JSON", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub async fn create_task<R: TaskRepository>(
    State(service): SharedService<R>,
    JsonBody(info): JsonBody<TaskInfo>,
) -> TaskResult<Json<Task>> {
    let task = service.create(info).await?;
    Ok(Json(task))
}

/// Replace a task's title and content
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = TaskInfo,
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Invalid request", body = ErrorPayload),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub async fn update_task<R: TaskRepository>(
    State(service): SharedService<R>,
    UuidPath(id): UuidPath,
    JsonBody(info): JsonBody<TaskInfo>,
) -> TaskResult<Response> {
    Ok(found_or_404(service.update(info, id).await?))
}

/// Mark a task completed or not completed
#[utoipa::path(
    put,
    path = "/{id}/status",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = TaskStatus,
    responses(
        (status = 200, description = "Task status updated", body = Task),
        (status = 400, description = "Invalid request", body = ErrorPayload),
        (status = 404, description = "Task not found"),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub async fn update_task_status<R: TaskRepository>(
    State(service): SharedService<R>,
    UuidPath(id): UuidPath,
    JsonBody(status): JsonBody<TaskStatus>,
) -> TaskResult<Response> {
    Ok(found_or_404(service.update_status(status, id).await?))
}

/// Delete a task; deleting a missing task still answers 204
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 400, description = "Invalid task ID", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub async fn delete_task<R: TaskRepository>(
    State(service): SharedService<R>,
    UuidPath(id): UuidPath,
) -> TaskResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
