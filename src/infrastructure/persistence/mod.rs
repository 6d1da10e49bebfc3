//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgVariableRepository`] - Campus variables
//! - [`PgUserRepository`] - Users and roles
//! - [`PgTokenRepository`] - Session access tokens

pub mod pg_token_repository;
pub mod pg_user_repository;
pub mod pg_variable_repository;

pub use pg_token_repository::PgTokenRepository;
pub use pg_user_repository::PgUserRepository;
pub use pg_variable_repository::PgVariableRepository;
