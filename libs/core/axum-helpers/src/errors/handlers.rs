use super::AppError;
use axum::http::Uri;

/// Fallback for routes that match nothing.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No handler found for {}", uri.path()))
}
