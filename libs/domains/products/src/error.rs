use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, errors::messages};
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

/// Every failure a product operation can surface.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found with id: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Internal(format!("Database error: {}", err))
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(id) => {
                AppError::NotFound(ProductError::NotFound(id).to_string())
            }
            ProductError::Validation(errors) => AppError::Validation(errors),
            ProductError::Internal(msg) => {
                tracing::error!(error = %msg, "Product operation failed");
                AppError::InternalServerError(messages::INTERNAL_ERROR.to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_message_names_id() {
        assert_eq!(
            ProductError::NotFound(42).to_string(),
            "Product not found with id: 42"
        );
    }

    #[test]
    fn test_status_per_kind() {
        let not_found = ProductError::NotFound(1).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let validation = ProductError::Validation(ValidationErrors::new()).into_response();
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);

        let internal = ProductError::from(DbErr::Custom("connection reset".into())).into_response();
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_detail_stays_out_of_response() {
        let app_error: AppError = ProductError::Internal("pool timed out".into()).into();
        assert_eq!(
            app_error.to_string(),
            format!("Internal Server Error: {}", messages::INTERNAL_ERROR)
        );
    }
}
