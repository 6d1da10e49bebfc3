#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, middleware};
use axum_test::TestServer;
use campus_variables::application::services::{AuthService, VariableService};
use campus_variables::domain::entities::{CurrentUser, NewVariable, User, Variable};
use campus_variables::domain::repositories::{
    AccessToken, TokenRepository, UserRepository, VariableRepository,
};
use campus_variables::error::AppError;
use campus_variables::state::AppState;
use campus_variables::web;
use campus_variables::web::middleware::web_auth;
use chrono::{TimeZone, Utc};
use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const TEST_SECRET: &str = "test-signing-secret";
pub const VALID_TOKEN: &str = "valid-token";
pub const USER_ID: i64 = 1;
pub const USERNAME: &str = "ana";

pub fn hash_token(token: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(TEST_SECRET.as_bytes()).unwrap();
    mac.update(token.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

pub fn variable(id: i64, name: &str, value: &str) -> Variable {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    Variable::new(id, name.to_string(), value.to_string(), None, at, at)
}

/// Token store keyed by token hash.
#[derive(Default)]
pub struct FakeTokens {
    users: Mutex<HashMap<String, CurrentUser>>,
    pub last_used_updates: AtomicUsize,
}

impl FakeTokens {
    pub fn with_token(token: &str, user: CurrentUser) -> Self {
        let fake = Self::default();
        fake.users.lock().unwrap().insert(hash_token(token), user);
        fake
    }
}

#[async_trait]
impl TokenRepository for FakeTokens {
    async fn find_user(&self, token_hash: &str) -> Result<Option<CurrentUser>, AppError> {
        Ok(self.users.lock().unwrap().get(token_hash).cloned())
    }

    async fn update_last_used(&self, _token_hash: &str) -> Result<(), AppError> {
        self.last_used_updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn create_token(
        &self,
        user_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<AccessToken, AppError> {
        self.users.lock().unwrap().insert(
            token_hash.to_string(),
            CurrentUser {
                id: user_id,
                username: name.to_string(),
            },
        );
        Ok(AccessToken {
            id: 1,
            user_id,
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        })
    }

    async fn list_tokens(&self) -> Result<Vec<AccessToken>, AppError> {
        Ok(Vec::new())
    }

    async fn revoke_token(&self, _id: i64) -> Result<bool, AppError> {
        Ok(false)
    }
}

/// User store with a fixed role per user id. `None` simulates a deleted user.
pub struct FakeUsers {
    role: Option<String>,
    pub role_lookups: AtomicUsize,
}

impl FakeUsers {
    pub fn with_role(role: Option<&str>) -> Self {
        Self {
            role: role.map(str::to_string),
            role_lookups: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn find_role(&self, _user_id: i64) -> Result<Option<String>, AppError> {
        self.role_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.role.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.role.as_ref().map(|role| User {
            id: USER_ID,
            username: username.to_string(),
            role: role.clone(),
            created_at: Utc::now(),
        }))
    }

    async fn create(&self, username: &str, role: &str) -> Result<User, AppError> {
        Ok(User {
            id: USER_ID,
            username: username.to_string(),
            role: role.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Variable store that counts list calls and can be made to fail.
pub struct FakeVariables {
    variables: Vec<Variable>,
    fail: bool,
    pub list_calls: AtomicUsize,
}

impl FakeVariables {
    pub fn new(variables: Vec<Variable>) -> Self {
        Self {
            variables,
            fail: false,
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            variables: Vec::new(),
            fail: true,
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VariableRepository for FakeVariables {
    async fn list(&self) -> Result<Vec<Variable>, AppError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(self.variables.clone())
    }

    async fn create(&self, new_variable: NewVariable) -> Result<Variable, AppError> {
        Ok(variable(
            self.variables.len() as i64 + 1,
            &new_variable.name,
            &new_variable.value,
        ))
    }

    async fn count(&self) -> Result<i64, AppError> {
        if self.fail {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(self.variables.len() as i64)
    }
}

/// Fakes behind a test server, kept for call-count assertions.
pub struct TestApp {
    pub server: TestServer,
    pub tokens: Arc<FakeTokens>,
    pub users: Arc<FakeUsers>,
    pub variables: Arc<FakeVariables>,
}

pub fn create_test_state(
    tokens: Arc<FakeTokens>,
    users: Arc<FakeUsers>,
    variables: Arc<FakeVariables>,
) -> AppState {
    let auth_service = Arc::new(AuthService::new(tokens, users, TEST_SECRET.to_string()));
    let variable_service = Arc::new(VariableService::new(variables));
    AppState::new(auth_service, variable_service)
}

/// Web routes with the login guard, without rate limiting.
///
/// `VALID_TOKEN` authenticates as `ana`, whose role is `role`.
pub fn make_app(role: Option<&str>, variables: FakeVariables) -> TestApp {
    let tokens = Arc::new(FakeTokens::with_token(
        VALID_TOKEN,
        CurrentUser {
            id: USER_ID,
            username: USERNAME.to_string(),
        },
    ));
    let users = Arc::new(FakeUsers::with_role(role));
    let variables = Arc::new(variables);

    let state = create_test_state(tokens.clone(), users.clone(), variables.clone());

    let protected = web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        web_auth::layer,
    ));

    let app = Router::new()
        .merge(protected)
        .merge(web::routes::public_routes())
        .with_state(state);

    TestApp {
        server: TestServer::new(app).unwrap(),
        tokens,
        users,
        variables,
    }
}
