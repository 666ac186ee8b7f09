//! HTTP API Layer
//!
//! This crate exposes claim key-field extraction and comparison over REST
//! using Axum, for the deduplication and diff-review services downstream of
//! document ingestion.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for extraction and comparison
//! - **Middleware**: Request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::config::ApiConfig;
use crate::middleware::request_log_middleware;
use crate::handlers::{claims, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState { config };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/extract", post(claims::extract))
        .route("/differences", post(claims::differences))
        .route("/compare", post(claims::compare))
        .route("/compare-text", post(claims::compare_text));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
