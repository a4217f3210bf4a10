//! DTOs for registration and login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::User;
use crate::error::AppError;

/// Message returned when either credential field is absent or empty.
pub const CREDENTIALS_REQUIRED: &str = "Email and password are required";

/// Body of `POST /api/auth/register` and `POST /api/auth/login`.
///
/// A field that is absent, `null` or empty fails the same presence check.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Checks that both fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the missing fields.
    pub fn into_credentials(self) -> Result<(String, String), AppError> {
        self.validate()
            .map_err(|e| AppError::invalid_fields(CREDENTIALS_REQUIRED, &e))?;

        match (self.email, self.password) {
            (Some(email), Some(password)) => Ok((email, password)),
            _ => Err(AppError::bad_request(CREDENTIALS_REQUIRED, Value::Null)),
        }
    }
}

/// User as returned by registration.
///
/// `password` carries the stored Argon2 hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            password: u.password_hash,
            created_at: u.created_at,
        }
    }
}

/// Response of a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserItem,
}
