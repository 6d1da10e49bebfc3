//! Users of the registry and the identity attached to an authenticated request.

use chrono::{DateTime, Utc};

/// A registered user and the organizational role assigned to them.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Identity of the caller, inserted into request extensions by the login guard.
///
/// Carries no role: the role is resolved per request so that changes take
/// effect without reissuing tokens.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}
