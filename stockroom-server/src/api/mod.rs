//! API routing module
//!
//! - [`products`] - product CRUD and listing
//! - [`categories`] - category lookup
//! - [`brands`] - brand lookup
//! - [`statistics`] - catalog summary counts
//! - [`health`] - health check

pub mod brands;
pub mod categories;
pub mod health;
pub mod products;
pub mod statistics;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::AppResponse;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(products::router())
        .merge(categories::router())
        .merge(brands::router())
        .merge(statistics::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
