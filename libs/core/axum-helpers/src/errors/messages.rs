//! Standard client-facing messages for error responses.

pub const INVALID_JSON: &str = "Malformed JSON request body";
pub const UNSUPPORTED_MEDIA_TYPE: &str = "Expected request with `Content-Type: application/json`";
pub const INVALID_QUERY: &str = "Invalid query parameters";
pub const INVALID_PATH: &str = "Invalid path parameter";
pub const NOT_FOUND_ROUTE: &str = "The requested resource was not found";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred";
pub const VALIDATION_FALLBACK: &str = "Invalid value";
