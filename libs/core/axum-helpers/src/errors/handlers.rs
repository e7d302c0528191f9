use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorResponse, messages};

/// Router fallback for unmatched paths.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(
        StatusCode::NOT_FOUND,
        messages::NOT_FOUND_ROUTE,
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}
