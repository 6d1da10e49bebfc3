//! PostgreSQL implementation of variable repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewVariable, Variable};
use crate::domain::repositories::VariableRepository;
use crate::error::AppError;

/// PostgreSQL repository for campus variables.
pub struct PgVariableRepository {
    pool: Arc<PgPool>,
}

impl PgVariableRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VariableRepository for PgVariableRepository {
    async fn list(&self) -> Result<Vec<Variable>, AppError> {
        let rows = sqlx::query_as::<_, Variable>(
            r#"
            SELECT id, name, value, description, created_at, updated_at
            FROM variables
            ORDER BY name
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn create(&self, new_variable: NewVariable) -> Result<Variable, AppError> {
        let row = sqlx::query_as::<_, Variable>(
            r#"
            INSERT INTO variables (name, value, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, value, description, created_at, updated_at
            "#,
        )
        .bind(new_variable.name)
        .bind(new_variable.value)
        .bind(new_variable.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM variables")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
