//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    login_page_handler, login_submit_handler, logout_handler, variable_list_handler,
};
use axum::{Router, routing::get};

/// Pages behind the login guard.
///
/// Protected via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /variables` - Variable registry (role-gated)
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/variables", get(variable_list_handler))
}

/// Public pages without authentication.
///
/// # Endpoints
///
/// - `GET  /login`  - Login page
/// - `POST /login`  - Sign in with a session token
/// - `GET  /logout` - Clear the session cookie
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page_handler).post(login_submit_handler))
        .route("/logout", get(logout_handler))
}
