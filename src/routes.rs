//! Top-level router combining API and operational routes.
//!
//! # Route Structure
//!
//! - `GET  /health`             - Health check (database ping)
//! - `/api/auth/*`              - Registration and login (strict rate limit)
//! - `/api/vendors`             - Vendor CRUD (standard rate limit)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let auth_router = api::routes::auth_routes().layer(rate_limit::secure_layer());
    let vendor_router = api::routes::vendor_routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", auth_router.merge(vendor_router))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
