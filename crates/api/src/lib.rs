//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for budget analysis and advice
//! - JSON error responses

pub mod error;
pub mod routes;

use axum::Router;
use finbot_advisor::AdviceGenerator;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Largest accepted request body.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Generates advice for free-text questions.
    pub advisor: Arc<dyn AdviceGenerator>,
}

impl AppState {
    /// Creates state around an advice generator.
    pub fn new(advisor: impl AdviceGenerator + 'static) -> Self {
        Self {
            advisor: Arc::new(advisor),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
