//! Custom extractors for Axum handlers.
//!
//! Each one rejects with an [`AppError`](crate::errors::AppError), so malformed
//! input renders the same error bodies as handler failures.

pub mod id_path;
pub mod validated_json;
pub mod validated_query;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
pub use validated_query::ValidatedQuery;
