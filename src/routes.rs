//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`           - Redirects to `/variables`
//! - `GET  /health`     - Health check (public)
//! - `GET  /variables`  - Variable registry (session cookie required)
//! - `GET|POST /login`, `GET /logout` - Session management (public)
//! - `/static/*`        - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Login guard** - Cookie session on protected pages
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), web_auth::layer),
    );
    let web_protected = rate_limit::apply(web_protected, behind_proxy, rate_limit::Tier::Secure);

    let web_public = rate_limit::apply(
        web::routes::public_routes(),
        behind_proxy,
        rate_limit::Tier::Public,
    );

    let router = Router::new()
        .route("/", get(|| async { Redirect::to("/variables") }))
        .route("/health", get(health_handler))
        .merge(web_protected)
        .merge(web_public)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
