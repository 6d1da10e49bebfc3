//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, VariableService};

/// Services shared across requests.
///
/// Services hold their repositories as trait objects, so tests build a state
/// from in-memory fakes without a database.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub variable_service: Arc<VariableService>,
}

impl AppState {
    pub fn new(auth_service: Arc<AuthService>, variable_service: Arc<VariableService>) -> Self {
        Self {
            auth_service,
            variable_service,
        }
    }
}
