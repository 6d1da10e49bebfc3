use campus_variables::domain::repositories::{TokenRepository, UserRepository};
use campus_variables::infrastructure::persistence::{PgTokenRepository, PgUserRepository};
use sqlx::PgPool;
use std::sync::Arc;

async fn create_user(pool: &PgPool, username: &str) -> i64 {
    PgUserRepository::new(Arc::new(pool.clone()))
        .create(username, "Gerencia Campus")
        .await
        .unwrap()
        .id
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_create_token(pool: PgPool) {
    let user_id = create_user(&pool, "ana").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo.create_token(user_id, "laptop", "hash123").await.unwrap();

    assert_eq!(token.user_id, user_id);
    assert_eq!(token.name, "laptop");
    assert_eq!(token.token_hash, "hash123");
    assert!(token.revoked_at.is_none());
    assert!(token.last_used_at.is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_find_user_valid(pool: PgPool) {
    let user_id = create_user(&pool, "ana").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token(user_id, "laptop", "validhash").await.unwrap();

    let user = repo.find_user("validhash").await.unwrap().unwrap();

    assert_eq!(user.id, user_id);
    assert_eq!(user.username, "ana");
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_find_user_unknown_hash(pool: PgPool) {
    let repo = PgTokenRepository::new(Arc::new(pool));

    assert!(repo.find_user("nonexistent").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_find_user_revoked(pool: PgPool) {
    let user_id = create_user(&pool, "ana").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo
        .create_token(user_id, "old", "revokedhash")
        .await
        .unwrap();
    assert!(repo.revoke_token(token.id).await.unwrap());

    assert!(repo.find_user("revokedhash").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_revoke_twice(pool: PgPool) {
    let user_id = create_user(&pool, "ana").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    let token = repo.create_token(user_id, "old", "hash").await.unwrap();

    assert!(repo.revoke_token(token.id).await.unwrap());
    assert!(!repo.revoke_token(token.id).await.unwrap());
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL instance (DATABASE_URL)"]
async fn test_update_last_used(pool: PgPool) {
    let user_id = create_user(&pool, "ana").await;
    let repo = PgTokenRepository::new(Arc::new(pool));

    repo.create_token(user_id, "laptop", "usedhash").await.unwrap();
    repo.update_last_used("usedhash").await.unwrap();

    let tokens = repo.list_tokens().await.unwrap();

    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].last_used_at.is_some());
}
