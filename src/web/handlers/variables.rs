//! Variable registry page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::entities::{CurrentUser, Variable};
use crate::error::AppError;
use crate::state::AppState;

/// Body returned to callers whose role may not see the registry.
pub const UNAUTHORIZED_BODY: &str = "Unauthorized User";

/// Template for the variable registry page.
///
/// Renders `templates/variables.html`. The create button, which navigates to
/// `/variablecreate`, is emitted only when `crear` is true.
#[derive(Template, WebTemplate)]
#[template(path = "variables.html")]
pub struct VariablesTemplate {
    pub variable_list: Vec<Variable>,
    pub crear: bool,
}

/// Renders the variable registry for campus management.
///
/// # Endpoint
///
/// `GET /variables` (behind the login guard)
///
/// # Responses
///
/// - **200 OK**: `variables.html` with every variable and the create button,
///   when the caller's role is exactly `Gerencia Campus`
/// - **403 Forbidden**: plain-text `Unauthorized User` for any other role;
///   the variable list is not read
///
/// Role resolution and listing failures propagate as [`AppError`].
pub async fn variable_list_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, AppError> {
    let role = state.auth_service.resolve_role(&user).await?;
    let crear = role.can_create_variables();

    if !role.can_view_variables() {
        tracing::warn!(username = %user.username, role = %role, "Variable list denied");
        metrics::counter!("variable_list_requests_total", "outcome" => "denied").increment(1);
        return Ok((StatusCode::FORBIDDEN, UNAUTHORIZED_BODY).into_response());
    }

    let variable_list = state.variable_service.list_variables().await?;

    tracing::debug!(
        username = %user.username,
        count = variable_list.len(),
        "Rendering variable list"
    );
    metrics::counter!("variable_list_requests_total", "outcome" => "rendered").increment(1);

    Ok(VariablesTemplate {
        variable_list,
        crear,
    }
    .into_response())
}
