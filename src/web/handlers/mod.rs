//! HTML template rendering handlers for the web dashboard.

mod login;
mod variables;

pub use login::{login_page_handler, login_submit_handler, logout_handler, safe_next};
pub use variables::{UNAUTHORIZED_BODY, VariablesTemplate, variable_list_handler};
