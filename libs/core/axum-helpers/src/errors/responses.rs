//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorResponse, ValidationErrorBody};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "message": "An unexpected error occurred",
        "timestamp": "2025-01-01T12:00:00Z"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "name": "Name must be between 3 and 100 characters",
        "price": "Price must be greater than 0"
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed path or query parameter",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "message": "Invalid path parameter: abc",
        "timestamp": "2025-01-01T12:00:00Z"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "message": "Product not found with id: 42",
        "timestamp": "2025-01-01T12:00:00Z"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
