//! Query string extractor with validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// [`Query`] plus [`Validate`]. Missing or unparsable parameters are a 400.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::Validation(e).into_response())?;

        Ok(ValidatedQuery(data))
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

    #[derive(Deserialize, Validate)]
    struct Window {
        #[validate(range(min = 0))]
        from: i64,
        to: i64,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            get(|ValidatedQuery(w): ValidatedQuery<Window>| async move { (w.to - w.from).to_string() }),
        )
    }

    async fn status_for(uri: &str) -> StatusCode {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_query_ok() {
        assert_eq!(status_for("/?from=1&to=5").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_query_missing_param() {
        assert_eq!(status_for("/?from=1").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_query_failing_validation() {
        assert_eq!(status_for("/?from=-1&to=5").await, StatusCode::BAD_REQUEST);
    }
}
