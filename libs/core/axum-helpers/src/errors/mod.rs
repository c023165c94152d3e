pub mod handlers;
pub mod path;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::any::type_name;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Error as UuidError;

/// Error body returned for every 4xx/5xx response that carries a payload.
///
/// ```json
/// {
///   "timestamp": "2024-02-15T10:04:12.511+00:00",
///   "status": 400,
///   "error": "Bad Request",
///   "exception": "axum::extract::rejection::JsonDataError",
///   "message": "missing field `content` at line 1 column 17",
///   "path": "/api/v1/tasks"
/// }
/// ```
///
/// `path` is filled in by [`path::attach_error_path`], since the response
/// conversion has no access to the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorPayload {
    #[schema(example = "2024-02-15T10:04:12.511+00:00")]
    pub timestamp: String,
    #[schema(example = 500)]
    pub status: u16,
    #[schema(example = "Internal Server Error")]
    pub error: String,
    #[schema(example = "sea_orm::error::DbErr")]
    pub exception: String,
    #[schema(example = "Connection refused")]
    pub message: String,
    #[schema(example = "/api/v1/tasks")]
    pub path: String,
}

impl ErrorPayload {
    pub fn new(
        status: StatusCode,
        exception: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, false),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            exception: exception.into(),
            message: message.into(),
            path: String::new(),
        }
    }
}

/// Application error type that renders as an [`ErrorPayload`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("UUID error: {0}")]
    UuidError(#[from] UuidError),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {message}")]
    InternalServerError {
        exception: &'static str,
        message: String,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(JsonRejection::MissingJsonContentType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            AppError::JsonExtractorRejection(JsonRejection::BytesRejection(e)) => e.status(),
            AppError::JsonExtractorRejection(_)
            | AppError::PathExtractorRejection(_)
            | AppError::QueryExtractorRejection(_)
            | AppError::UuidError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Rust type name reported as the payload `exception`
    pub fn exception(&self) -> &'static str {
        match self {
            AppError::JsonExtractorRejection(rejection) => match rejection {
                JsonRejection::JsonDataError(_) => {
                    type_name::<axum::extract::rejection::JsonDataError>()
                }
                JsonRejection::JsonSyntaxError(_) => {
                    type_name::<axum::extract::rejection::JsonSyntaxError>()
                }
                JsonRejection::MissingJsonContentType(_) => {
                    type_name::<axum::extract::rejection::MissingJsonContentType>()
                }
                _ => type_name::<JsonRejection>(),
            },
            AppError::PathExtractorRejection(_) => type_name::<PathRejection>(),
            AppError::QueryExtractorRejection(_) => type_name::<QueryRejection>(),
            AppError::UuidError(_) => type_name::<UuidError>(),
            AppError::InternalServerError { exception, .. } => *exception,
            AppError::NotFound(_) => type_name::<AppError>(),
        }
    }

    fn message(&self) -> String {
        match self {
            AppError::JsonExtractorRejection(e) => e.body_text(),
            AppError::PathExtractorRejection(e) => e.body_text(),
            AppError::QueryExtractorRejection(e) => e.body_text(),
            AppError::UuidError(e) => format!("Invalid UUID: {}", e),
            AppError::InternalServerError { message, .. } | AppError::NotFound(message) => {
                message.clone()
            }
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        ErrorPayload::new(self.status(), self.exception(), self.message())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let payload = self.to_payload();
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(
                status = status.as_u16(),
                exception = %payload.exception,
                "Request failed: {}",
                self
            );
        } else {
            tracing::info!(
                status = status.as_u16(),
                exception = %payload.exception,
                "Request rejected: {}",
                self
            );
        }

        let mut response = (status, Json(payload.clone())).into_response();
        response.extensions_mut().insert(payload);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_payload_uses_canonical_reason() {
        let payload = ErrorPayload::new(StatusCode::BAD_REQUEST, "some::Error", "bad");
        assert_eq!(payload.status, 400);
        assert_eq!(payload.error, "Bad Request");
        assert_eq!(payload.exception, "some::Error");
        assert!(payload.path.is_empty());
    }

    #[test]
    fn test_payload_timestamp_format() {
        let payload = ErrorPayload::new(StatusCode::INTERNAL_SERVER_ERROR, "e", "m");
        // 2024-02-15T10:04:12.511+00:00
        assert_eq!(payload.timestamp.len(), 29);
        assert!(payload.timestamp.ends_with("+00:00"));
        assert_eq!(&payload.timestamp[19..20], ".");
    }

    #[test]
    fn test_internal_error_keeps_exception_name() {
        let err = AppError::InternalServerError {
            exception: "std::io::Error",
            message: "disk gone".to_string(),
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.exception(), "std::io::Error");
        assert_eq!(err.to_payload().message, "disk gone");
    }

    #[test]
    fn test_uuid_error_maps_to_400() {
        let err = AppError::from(uuid::Uuid::parse_str("nope").unwrap_err());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_payload().message.starts_with("Invalid UUID"));
    }

    #[tokio::test]
    async fn test_into_response_writes_payload_body_and_extension() {
        let response = AppError::NotFound("No handler found for /nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.extensions().get::<ErrorPayload>().is_some());

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: ErrorPayload = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload.status, 404);
        assert_eq!(payload.error, "Not Found");
        assert_eq!(payload.message, "No handler found for /nope");
    }
}
