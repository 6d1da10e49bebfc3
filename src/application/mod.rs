//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Session token authentication and role resolution
//! - [`services::variable_service::VariableService`] - Campus variable listing and registration

pub mod services;
