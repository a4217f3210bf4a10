//! Registration and login service.

use serde_json::{Value, json};
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_against_dummy, verify_password};

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Service for account registration and credential checks.
///
/// Passwords are hashed with Argon2id on the blocking thread pool. Login does
/// not distinguish an unknown email from a wrong password, and both paths run
/// one hash verification.
///
/// No session or token is issued on successful login.
pub struct AuthService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn register(&self, email: String, password: String) -> Result<User, AppError> {
        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(
                "User already exists",
                json!({"email": email}),
            ));
        }

        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing task failed");
                AppError::internal("Internal server error", Value::Null)
            })??;

        let user = self
            .repository
            .create(NewUser {
                email,
                password_hash,
            })
            .await?;

        metrics::counter!("users_registered_total").increment(1);
        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }

    /// Verifies a user's credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with [`INVALID_CREDENTIALS`] if the
    /// email is unknown or the password does not match.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn login(&self, email: &str, password: String) -> Result<User, AppError> {
        let user = self.repository.find_by_email(email).await?;

        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let matches = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => verify_password(&password, &hash),
            None => verify_against_dummy(&password),
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password verification task failed");
            AppError::internal("Internal server error", Value::Null)
        })?;

        match user {
            Some(user) if matches => {
                metrics::counter!("login_attempts_total", "outcome" => "success").increment(1);
                tracing::info!(user_id = %user.id, "Login successful");
                Ok(user)
            }
            _ => {
                metrics::counter!("login_attempts_total", "outcome" => "failure").increment(1);
                tracing::warn!(email = %email, "Login failed");
                Err(AppError::unauthorized(INVALID_CREDENTIALS, Value::Null))
            }
        }
    }

    /// Lists all registered users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// Counts registered users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;
    use uuid::Uuid;

    fn stored_user(email: &str, plain: &str) -> User {
        User::new(
            Uuid::new_v4(),
            email.to_string(),
            hash_password(plain).unwrap(),
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_register_success_hashes_password() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "new@example.com")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_create()
            .withf(|new_user| {
                new_user.email == "new@example.com"
                    && new_user.password_hash != "hunter22"
                    && verify_password("hunter22", &new_user.password_hash)
            })
            .times(1)
            .returning(|new_user| {
                Ok(User::new(
                    Uuid::new_v4(),
                    new_user.email,
                    new_user.password_hash,
                    Utc::now(),
                ))
            });

        let service = AuthService::new(Arc::new(mock_repo));

        let user = service
            .register("new@example.com".to_string(), "hunter22".to_string())
            .await
            .unwrap();

        assert_eq!(user.email, "new@example.com");
        assert!(user.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut mock_repo = MockUserRepository::new();

        let existing = stored_user("taken@example.com", "whatever");
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_create().never();

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service
            .register("taken@example.com".to_string(), "pw".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_register_race_conflict_propagates() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_find_by_email().returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .returning(|_| Err(AppError::conflict("User already exists", Value::Null)));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service
            .register("race@example.com".to_string(), "pw".to_string())
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut mock_repo = MockUserRepository::new();

        let user = stored_user("ok@example.com", "right-password");
        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "ok@example.com")
            .returning(move |_| Ok(Some(user.clone())));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service
            .login("ok@example.com", "right-password".to_string())
            .await;

        assert_eq!(result.unwrap().email, "ok@example.com");
    }

    #[tokio::test]
    async fn test_login_wrong_password_and_unknown_email_are_identical() {
        let mut mock_repo = MockUserRepository::new();

        let user = stored_user("known@example.com", "right-password");
        mock_repo.expect_find_by_email().returning(move |email| {
            if email == "known@example.com" {
                Ok(Some(user.clone()))
            } else {
                Ok(None)
            }
        });

        let service = AuthService::new(Arc::new(mock_repo));

        let wrong_password = service
            .login("known@example.com", "wrong-password".to_string())
            .await
            .unwrap_err();
        let unknown_email = service
            .login("ghost@example.com", "right-password".to_string())
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::Unauthorized { .. }));
        assert!(matches!(unknown_email, AppError::Unauthorized { .. }));

        let a = wrong_password.to_error_body();
        let b = unknown_email.to_error_body();
        assert_eq!(a.message, INVALID_CREDENTIALS);
        assert_eq!(a.message, b.message);
        assert_eq!(a.code, b.code);
        assert_eq!(a.details, b.details);
    }

    #[tokio::test]
    async fn test_login_database_error() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .returning(|_| Err(AppError::internal("Internal server error", Value::Null)));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.login("a@example.com", "pw".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_count_users() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo.expect_count().times(1).returning(|| Ok(3));

        let service = AuthService::new(Arc::new(mock_repo));

        assert_eq!(service.count_users().await.unwrap(), 3);
    }
}
