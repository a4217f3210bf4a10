//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so services can be tested against
//! `mockall` mocks and the HTTP layer against in-memory fakes.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - user insert and lookup
//! - [`VendorRepository`] - vendor CRUD
//! - [`HealthRepository`] - storage liveness probe
//!
//! Implementations live in `crate::infrastructure::persistence`.

pub mod health_repository;
pub mod user_repository;
pub mod vendor_repository;

pub use health_repository::HealthRepository;
pub use user_repository::UserRepository;
pub use vendor_repository::VendorRepository;

#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use vendor_repository::MockVendorRepository;
