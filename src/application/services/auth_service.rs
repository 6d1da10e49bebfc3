//! Authentication and role resolution for dashboard sessions.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::Role;
use crate::domain::entities::CurrentUser;
use crate::domain::repositories::{AccessToken, TokenRepository, UserRepository};
use crate::error::AppError;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Service for authenticating session tokens and resolving caller roles.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before storage
/// and comparison. An attacker with read-only access to the database cannot verify
/// or forge tokens without the server-side secret.
pub struct AuthService {
    tokens: Arc<dyn TokenRepository>,
    users: Arc<dyn UserRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `tokens` - token repository for DB operations
    /// - `users` - user repository used to resolve roles
    /// - `signing_secret` - HMAC key; must match the value used when tokens were issued
    pub fn new(
        tokens: Arc<dyn TokenRepository>,
        users: Arc<dyn UserRepository>,
        signing_secret: String,
    ) -> Self {
        Self {
            tokens,
            users,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Authenticates a raw token and returns the identity that owns it.
    ///
    /// On success, updates the `last_used_at` timestamp; a failure to do so is
    /// logged and does not fail authentication.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is unknown or revoked.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<CurrentUser, AppError> {
        let token_hash = self.hash_token(token);

        let user = self.tokens.find_user(&token_hash).await?.ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or revoked token"}),
            )
        })?;

        if let Err(e) = self.tokens.update_last_used(&token_hash).await {
            tracing::warn!(error = %e, user_id = user.id, "Failed to update token last_used_at");
        }

        Ok(user)
    }

    /// Resolves the organizational role of an authenticated caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the user no longer exists or on
    /// database errors.
    pub async fn resolve_role(&self, user: &CurrentUser) -> Result<Role, AppError> {
        let name = self.users.find_role(user.id).await?.ok_or_else(|| {
            AppError::internal(
                "Authenticated user has no record",
                json!({"user_id": user.id}),
            )
        })?;

        Ok(Role::from_name(&name))
    }

    /// Issues a new token for `username` and returns the raw value.
    ///
    /// The raw token is never stored; callers must hand it to the user now.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn issue_token(&self, username: &str, name: &str) -> Result<String, AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"username": username})))?;

        let token = generate_token();
        self.tokens
            .create_token(user.id, name, &self.hash_token(&token))
            .await?;

        tracing::info!(user_id = user.id, token_name = name, "Access token issued");
        Ok(token)
    }

    /// Lists all issued tokens.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_tokens(&self) -> Result<Vec<AccessToken>, AppError> {
        self.tokens.list_tokens().await
    }

    /// Revokes a token by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no active token has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn revoke_token(&self, id: i64) -> Result<(), AppError> {
        if !self.tokens.revoke_token(id).await? {
            return Err(AppError::not_found(
                "Active token not found",
                json!({"id": id}),
            ));
        }
        Ok(())
    }
}

/// Generates a random URL-safe token from 32 bytes of entropy.
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
