//! Route definitions for the bookstore API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod account;
mod catalog;
mod lists;

#[cfg(test)]
mod auth_tests;

pub use account::account_routes;
pub use catalog::catalog_routes;
pub use lists::list_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Backend is Running" }))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
///
/// All routers share the /api/v1 prefix rather than nesting under their own,
/// so the paths read exactly as published: /api/v1/signup, /api/v1/addbook,
/// /api/v1/addtocart/:bookId, ...
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(account::account_routes())
        .merge(catalog::catalog_routes())
        .merge(lists::list_routes())
}
