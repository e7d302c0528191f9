pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error body for every failure except field validation.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": 404,
///   "message": "Product not found with id: 42",
///   "timestamp": "2025-01-01T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Human-readable error message
    pub message: String,
    /// When the error was produced (RFC 3339)
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Error body for field validation failures: field name → first message.
pub type ValidationErrorBody = BTreeMap<String, String>;

/// Flatten validator output into one message per field.
///
/// Falls back to the validator code when a rule carries no message.
pub fn validation_error_map(errors: &ValidationErrors) -> ValidationErrorBody {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| match err.code.as_ref() {
                        "" => messages::VALIDATION_FALLBACK.to_string(),
                        code => code.to_string(),
                    });
                (field.to_string(), message)
            })
        })
        .collect()
}

/// Application error type that renders as an HTTP response.
///
/// Each variant maps to exactly one status code; there is no catch-all that
/// reuses another variant's status.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryExtractorRejection(#[from] QueryRejection),

    #[error("Path extraction error: {0}")]
    PathExtractorRejection(#[from] PathRejection),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Status code this error renders with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(JsonRejection::MissingJsonContentType(_)) => {
                StatusCode::UNSUPPORTED_MEDIA_TYPE
            }
            AppError::JsonExtractorRejection(_)
            | AppError::QueryExtractorRejection(_)
            | AppError::PathExtractorRejection(_)
            | AppError::Validation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self {
            AppError::Validation(e) => {
                tracing::info!(error = ?e, "Validation error");
                return (status, Json(validation_error_map(&e))).into_response();
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error = %e.body_text(), "JSON extraction error");
                match e {
                    JsonRejection::MissingJsonContentType(_) => {
                        messages::UNSUPPORTED_MEDIA_TYPE.to_string()
                    }
                    other => format!("{}: {}", messages::INVALID_JSON, other.body_text()),
                }
            }
            AppError::QueryExtractorRejection(e) => {
                tracing::warn!(error = %e.body_text(), "Query extraction error");
                format!("{}: {}", messages::INVALID_QUERY, e.body_text())
            }
            AppError::PathExtractorRejection(e) => {
                tracing::warn!(error = %e.body_text(), "Path extraction error");
                format!("{}: {}", messages::INVALID_PATH, e.body_text())
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                msg
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                msg
            }
        };

        (status, Json(ErrorResponse::new(status, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use validator::ValidationError;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_renders_status_message_timestamp() {
        let response = AppError::NotFound("Product not found with id: 7".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["message"], "Product not found with id: 7");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_internal_error_is_500_not_404() {
        let response =
            AppError::InternalServerError(messages::INTERNAL_ERROR.to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["status"], 500);
        assert_eq!(body["message"], messages::INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_validation_renders_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "name",
            ValidationError::new("length").with_message("Name must be between 3 and 100 characters".into()),
        );
        errors.add("price", ValidationError::new("range"));

        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["name"], "Name must be between 3 and 100 characters");
        assert_eq!(body["price"], "range");
        assert!(body.get("status").is_none());
    }

    #[test]
    fn test_validation_error_map_keeps_first_message_per_field() {
        let mut errors = ValidationErrors::new();
        errors.add("name", ValidationError::new("blank").with_message("Name is required".into()));
        errors.add("name", ValidationError::new("length").with_message("too short".into()));

        let map = validation_error_map(&errors);
        assert_eq!(map.len(), 1);
        assert_eq!(map["name"], "Name is required");
    }
}
