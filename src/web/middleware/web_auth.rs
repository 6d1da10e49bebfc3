//! Cookie-based login guard for dashboard pages.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::COOKIE},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;

/// Name of the cookie carrying the session token.
pub const AUTH_COOKIE: &str = "auth_token";

/// Path of the login page that unauthenticated callers are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Requires a valid session before a protected page handler runs.
///
/// # Cookie Format
///
/// ```text
/// Cookie: auth_token=<token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract `auth_token` cookie from request
/// 2. Validate token via [`crate::application::services::AuthService`]
/// 3. On success, insert the [`crate::domain::entities::CurrentUser`] into
///    request extensions and continue to the handler
/// 4. On failure or missing token, redirect to `/login?next=<original path>`
///
/// Unlike an API guard that answers `401 Unauthorized`, browsers are sent to
/// the login page and returned to the page they asked for afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::get, middleware};
/// use crate::web::middleware::web_auth;
///
/// let protected = Router::new()
///     .route("/variables", get(variable_list_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), web_auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| "/".to_string());

    let Some(token) = auth_cookie(req.headers()) else {
        tracing::debug!(path = %target, "No session cookie, redirecting to login");
        return Err(Redirect::to(&login_url(&target)));
    };

    match st.auth_service.authenticate(&token).await {
        Ok(user) => {
            tracing::debug!(username = %user.username, "Session authenticated");
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::info!(error = %e, path = %target, "Session rejected");
            Err(Redirect::to(&login_url(&target)))
        }
    }
}

/// Extracts the `auth_token` value from the `Cookie` header.
///
/// Handles several cookies in one header by splitting on semicolons and
/// ignoring everything but `auth_token`. Empty values count as missing.
pub fn auth_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(AUTH_COOKIE), Some(value)) if !value.is_empty() => Some(value.to_string()),
                _ => None,
            }
        })
}

/// Builds the login URL that returns to `target` after signing in.
pub fn login_url(target: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_bytes()).collect();
    format!("{LOGIN_PATH}?next={encoded}")
}
