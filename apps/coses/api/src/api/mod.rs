use axum::{Router, routing::get};

pub mod health;
pub mod tasks;

/// API routes without the `/api` prefix, which `create_router` adds.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/v1/tasks", tasks::router(state))
}

/// `/ready` with a live database check, merged beside the stateless router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
