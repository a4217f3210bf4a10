//! Integration tests for `PgUserRepository`.
//!
//! Need a PostgreSQL server: `DATABASE_URL=... cargo test -- --ignored`.

use sqlx::PgPool;
use std::sync::Arc;
use vendor_registry::domain::entities::NewUser;
use vendor_registry::domain::repositories::UserRepository;
use vendor_registry::error::AppError;
use vendor_registry::infrastructure::persistence::PgUserRepository;

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_create_and_find_user(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let created = repo.create(new_user("find-me@example.com")).await.unwrap();
    let found = repo
        .find_by_email("find-me@example.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, created.password_hash);
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_find_unknown_email(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let found = repo.find_by_email("nobody@example.com").await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_duplicate_email_conflicts(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("dup@example.com")).await.unwrap();
    let result = repo.create(new_user("dup@example.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_list_users(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.create(new_user("one@example.com")).await.unwrap();
    repo.create(new_user("two@example.com")).await.unwrap();

    let users = repo.list().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(repo.count().await.unwrap(), 2);
}
