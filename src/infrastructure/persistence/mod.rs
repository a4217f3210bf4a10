//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//! Queries are checked at runtime and decoded through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - user storage and lookup
//! - [`PgVendorRepository`] - vendor CRUD
//! - [`PgHealthRepository`] - connectivity probe

pub mod pg_health_repository;
pub mod pg_user_repository;
pub mod pg_vendor_repository;

pub use pg_health_repository::PgHealthRepository;
pub use pg_user_repository::PgUserRepository;
pub use pg_vendor_repository::PgVendorRepository;
