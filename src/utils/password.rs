//! Password hashing with Argon2id at a fixed cost.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=...`), so the salt and
//! parameters travel with the digest. These functions are CPU-bound; async
//! callers should run them on `tokio::task::spawn_blocking`.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;
use std::sync::LazyLock;

use crate::error::AppError;

/// Memory cost in KiB (19 MiB).
pub const MEMORY_COST_KIB: u32 = 19 * 1024;
/// Number of passes over memory.
pub const TIME_COST: u32 = 2;
/// Degree of parallelism.
pub const PARALLELISM: u32 = 1;

/// Hash verified against when the requested account does not exist, so that
/// a miss costs as much as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("dummy-password-for-timing").ok());

fn hasher() -> Result<Argon2<'static>, AppError> {
    let params = Params::new(MEMORY_COST_KIB, TIME_COST, PARALLELISM, None).map_err(|e| {
        AppError::internal("Invalid password hashing parameters", json!({"reason": e.to_string()}))
    })?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a plaintext password with a fresh random salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            AppError::internal("Internal server error", serde_json::Value::Null)
        })?;

    Ok(hash.to_string())
}

/// Checks a plaintext password against a stored PHC hash.
///
/// A malformed stored hash never matches.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is malformed");
            return false;
        }
    };

    match hasher() {
        Ok(hasher) => hasher.verify_password(plain.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}

/// Computes the dummy hash now instead of on the first unknown-email login.
///
/// Returns `false` if hashing failed, in which case unknown-email logins skip
/// the extra verification.
pub fn init_dummy_hash() -> bool {
    LazyLock::force(&DUMMY_HASH).is_some()
}

/// Burns one verification against a fixed hash. Always returns `false`.
pub fn verify_against_dummy(plain: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(plain, hash);
    }
    false
}
