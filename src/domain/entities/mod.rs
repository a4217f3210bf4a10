//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Each has a
//! companion input type used when creating records:
//!
//! - [`User`] / [`NewUser`] - registered accounts
//! - [`Vendor`] / [`VendorFields`] - tracked vendors

pub mod user;
pub mod vendor;

pub use user::{NewUser, User};
pub use vendor::{Vendor, VendorFields};
