//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs deserialize with Serde and check field presence with
//! `validator`. Response DTOs use camelCase field names.

pub mod auth;
pub mod health;
pub mod message;
pub mod vendor;
