//! Business logic services for the application layer.

pub mod auth_service;
pub mod vendor_service;

pub use auth_service::AuthService;
pub use vendor_service::VendorService;
