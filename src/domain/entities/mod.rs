//! Core domain entities.
//!
//! - [`Variable`] - A campus variable shown in the registry
//! - [`User`] - A registered user with an organizational role
//! - [`CurrentUser`] - The authenticated caller of a request

pub mod user;
pub mod variable;

pub use user::{CurrentUser, User};
pub use variable::{NewVariable, Variable};
