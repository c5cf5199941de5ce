//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Landing page
//! - `GET  /health`      - Health check
//! - `GET  /{code}`      - Short link redirect
//! - `/api/links/*`      - Link management REST API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Metrics** - Request count and latency via the `metrics` facade
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{metrics, tracing};
use crate::state::AppState;
use crate::web::home_handler;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api/links", api::routes::link_routes())
        .with_state(state)
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
