//! Domain entity representing a registered user.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account.
///
/// `password_hash` always holds an Argon2 PHC string, never the plaintext.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: Uuid, email: String, password_hash: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            password_hash,
            created_at,
        }
    }
}

/// Input data for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}
