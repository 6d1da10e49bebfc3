//! Campus variable service.

use crate::domain::entities::{NewVariable, Variable};
use crate::domain::repositories::VariableRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

const MAX_NAME_LEN: usize = 100;

/// Service for reading and registering campus variables.
pub struct VariableService {
    repository: Arc<dyn VariableRepository>,
}

impl VariableService {
    /// Creates a new variable service.
    pub fn new(repository: Arc<dyn VariableRepository>) -> Self {
        Self { repository }
    }

    /// Returns every variable, ordered by name. No filtering, no pagination.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_variables(&self) -> Result<Vec<Variable>, AppError> {
        self.repository.list().await
    }

    /// Counts stored variables.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_variables(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Registers a new variable.
    ///
    /// # Validation
    ///
    /// - Name: 1-100 characters after trimming, no whitespace inside
    /// - Value: must not be empty
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if validation fails.
    /// Returns [`AppError::Conflict`] if the name is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_variable(
        &self,
        name: String,
        value: String,
        description: Option<String>,
    ) -> Result<Variable, AppError> {
        let name = name.trim().to_string();
        validate_name(&name)?;

        if value.is_empty() {
            return Err(AppError::bad_request(
                "Variable value must not be empty",
                json!({"name": name}),
            ));
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        self.repository
            .create(NewVariable {
                name,
                value,
                description,
            })
            .await
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::bad_request(
            "Invalid variable name length",
            json!({"min": 1, "max": MAX_NAME_LEN}),
        ));
    }

    if name.chars().any(char::is_whitespace) {
        return Err(AppError::bad_request(
            "Variable name must not contain whitespace",
            json!({"name": name}),
        ));
    }

    Ok(())
}
