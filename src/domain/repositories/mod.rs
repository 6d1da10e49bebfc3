//! Repository trait definitions for the domain layer.
//!
//! Traits define the data contracts; PostgreSQL implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`VariableRepository`] - Campus variable storage
//! - [`UserRepository`] - Users and their roles
//! - [`TokenRepository`] - Session access tokens

pub mod token_repository;
pub mod user_repository;
pub mod variable_repository;

pub use token_repository::{AccessToken, TokenRepository};
pub use user_repository::UserRepository;
pub use variable_repository::VariableRepository;

#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use variable_repository::MockVariableRepository;
