//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::middleware::web_auth::{AUTH_COOKIE, LOGIN_PATH};

/// Where callers land after signing in when no safe `next` is given.
pub const DEFAULT_LANDING: &str = "/variables";

/// Template for the login page.
///
/// Renders `templates/login.html` with a token form and an optional error.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub next: String,
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

/// Submitted login form.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 512, message = "Token must be 1-512 characters"))]
    pub token: String,
    #[serde(default)]
    pub next: Option<String>,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login?next=<path>`
pub async fn login_page_handler(Query(query): Query<LoginQuery>) -> impl IntoResponse {
    LoginTemplate {
        next: safe_next(query.next.as_deref()).to_string(),
        error: None,
    }
}

/// Signs a user in with a session token.
///
/// # Endpoint
///
/// `POST /login` (form: `token`, `next`)
///
/// # Responses
///
/// - **303 See Other** to `next` (or `/variables`) with the `auth_token`
///   cookie set, when the token is valid
/// - **400 Bad Request** with the login page when the form is invalid
/// - **401 Unauthorized** with the login page when the token is rejected
///
/// Database failures propagate as [`AppError`].
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let next = safe_next(form.next.as_deref()).to_string();

    if let Err(e) = form.validate() {
        tracing::debug!(error = %e, "Invalid login form");
        return Ok(login_failure(StatusCode::BAD_REQUEST, next, "Ingrese un token válido."));
    }

    let token = form.token.trim();
    let user = match state.auth_service.authenticate(token).await {
        Ok(user) => user,
        Err(AppError::Unauthorized { .. }) => {
            metrics::counter!("login_attempts_total", "outcome" => "failure").increment(1);
            tracing::info!("Login rejected");
            return Ok(login_failure(
                StatusCode::UNAUTHORIZED,
                next,
                "Token inválido o revocado.",
            ));
        }
        Err(e) => return Err(e),
    };

    metrics::counter!("login_attempts_total", "outcome" => "success").increment(1);
    tracing::info!(username = %user.username, "User signed in");

    let cookie = format!("{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    Ok(([(SET_COOKIE, cookie)], Redirect::to(&next)).into_response())
}

/// Clears the session cookie and returns to the login page.
///
/// # Endpoint
///
/// `GET /logout`
pub async fn logout_handler() -> impl IntoResponse {
    let cookie = format!("{AUTH_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    ([(SET_COOKIE, cookie)], Redirect::to(LOGIN_PATH))
}

fn login_failure(status: StatusCode, next: String, message: &str) -> Response {
    let page = LoginTemplate {
        next,
        error: Some(message.to_string()),
    };
    (status, page).into_response()
}

/// Accepts only local absolute paths as redirect targets.
///
/// Anything else, including protocol-relative `//host` and backslash tricks,
/// falls back to [`DEFAULT_LANDING`].
pub fn safe_next(next: Option<&str>) -> &str {
    match next {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.starts_with(LOGIN_PATH) =>
        {
            path
        }
        _ => DEFAULT_LANDING,
    }
}
