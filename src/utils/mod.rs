//! Helpers shared across layers.
//!
//! - [`password`] - Argon2id hashing and verification
//! - [`db_error`] - classification of database errors

pub mod db_error;
pub mod password;
