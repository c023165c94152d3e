use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// `Query<T>` whose rejection is an [`AppError`].
#[derive(Debug, Clone)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Filter {
        completed: Option<bool>,
    }

    async fn list(QueryParams(filter): QueryParams<Filter>) -> String {
        format!("{:?}", filter.completed)
    }

    async fn status_for(uri: &str) -> StatusCode {
        Router::new()
            .route("/", get(list))
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_optional_flag() {
        assert_eq!(status_for("/").await, StatusCode::OK);
        assert_eq!(status_for("/?completed=true").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_bad_flag_is_400() {
        assert_eq!(status_for("/?completed=maybe").await, StatusCode::BAD_REQUEST);
    }
}
