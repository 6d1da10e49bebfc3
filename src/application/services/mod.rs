//! Business logic services for the application layer.

pub mod auth_service;
pub mod variable_service;

pub use auth_service::AuthService;
pub use variable_service::VariableService;
