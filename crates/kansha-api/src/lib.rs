/// Kansha API - HTTP service that appends gratitude messages to a Google Sheet
///
/// This crate contains the axum router, the submission and health handlers,
/// and the shared context holding the Google API clients.
pub mod api;
pub mod context;
pub mod error;
pub mod middleware;

pub use context::ApiContext;
pub use error::ApiError;

use axum::{
    Router,
    http::{Method, header},
    middleware as axum_middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Builds the application router
pub fn router(ctx: Arc<ApiContext>) -> Router {
    // API v1 routes
    let v1_router = Router::new()
        .route("/health", get(api::health::handler))
        .route("/messages", post(api::messages::submit));

    Router::new()
        .nest("/v1", v1_router)
        // Request logging middleware
        .route_layer(axum_middleware::from_fn_with_state(
            Arc::clone(&ctx),
            middleware::logging_middleware,
        ))
        // CORS middleware allowing all origins (the form is served elsewhere)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(ctx)
}
