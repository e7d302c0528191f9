//! Shared application state.

/// Cloned into each router that needs it (cheap: the pool is reference counted).
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: database::postgres::DatabaseConnection,
}
