//! Repository trait for campus variables.

use crate::domain::entities::{NewVariable, Variable};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for reading and creating variables.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVariableRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VariableRepository: Send + Sync {
    /// Lists every variable, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Variable>, AppError>;

    /// Creates a new variable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a variable with the same name exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_variable: NewVariable) -> Result<Variable, AppError>;

    /// Counts stored variables. Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
