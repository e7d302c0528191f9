use axum::Router;

pub mod health;
pub mod products;

/// API routes without the `/api` prefix; `create_router` nests them.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(
        domain_products::handlers::PRODUCTS_PATH,
        products::router(state),
    )
}

/// `/ready`, pinging the database on every call.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
