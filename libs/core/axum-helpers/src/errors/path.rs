use super::ErrorPayload;
use axum::{
    Json,
    extract::Request,
    http::header::CONTENT_LENGTH,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Fill in the `path` of any [`ErrorPayload`] produced further down the stack.
///
/// Responses built from [`super::AppError`] carry their payload as a response
/// extension; this layer rewrites the JSON body with the request path set.
/// Responses without the extension pass through untouched.
pub async fn attach_error_path(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let response = next.run(request).await;

    let Some(payload) = response.extensions().get::<ErrorPayload>() else {
        return response;
    };

    let payload = ErrorPayload {
        path,
        ..payload.clone()
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    let body = Json(payload).into_response().into_body();
    Response::from_parts(parts, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::StatusCode,
        middleware,
        routing::get,
    };
    use tower::ServiceExt;

    async fn fails() -> Result<&'static str, AppError> {
        Err(AppError::NotFound("gone".to_string()))
    }

    async fn succeeds() -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new()
            .route("/fails", get(fails))
            .route("/ok", get(succeeds))
            .layer(middleware::from_fn(attach_error_path))
    }

    #[tokio::test]
    async fn test_error_payload_gets_request_path() {
        let response = app()
            .oneshot(Request::get("/fails?x=1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let payload: ErrorPayload = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload.path, "/fails");
        assert_eq!(payload.message, "gone");
    }

    #[tokio::test]
    async fn test_plain_response_is_untouched() {
        let response = app()
            .oneshot(Request::get("/ok").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}
