//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /api/profile` - Aggregated profile document
//! - everything else   - Static assets from the configured directory
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::profile_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served for every path that is not an API route
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/api/profile", get(profile_handler))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
