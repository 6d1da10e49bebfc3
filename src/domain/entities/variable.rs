//! Variable entity listed by the campus registry.

use chrono::{DateTime, Utc};

/// A named campus variable.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Variable {
    pub id: i64,
    pub name: String,
    pub value: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Variable {
    pub fn new(
        id: i64,
        name: String,
        value: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            value,
            description,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new variable.
#[derive(Debug, Clone)]
pub struct NewVariable {
    pub name: String,
    pub value: String,
    pub description: Option<String>,
}
