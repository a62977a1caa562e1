//! API Routes
//!
//! Configures the Axum router with all lookup service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cleanup_cache_handler, clear_cache_handler, health_handler, lookup_handler, query_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /lookup/:keyword` - Look up one abbreviation
/// - `POST /query` - Answer a chat message such as `hhh是什么`
/// - `POST /cache/clear` - Forget every cached result
/// - `POST /cache/cleanup` - Sweep expired results
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/lookup/:keyword", get(lookup_handler))
        .route("/query", post(query_handler))
        .route("/cache/clear", post(clear_cache_handler))
        .route("/cache/cleanup", post(cleanup_cache_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
