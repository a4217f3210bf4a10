//! Application layer services implementing business logic.
//!
//! Services sit between HTTP handlers and repositories: they enforce business
//! rules (duplicate emails, credential checks, not-found handling) and keep
//! handlers free of storage details.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - registration and login
//! - [`services::vendor_service::VendorService`] - vendor CRUD

pub mod services;
