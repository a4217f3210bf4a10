//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod fallback;
pub mod health;
pub mod vendors;

pub use auth::{login_handler, register_handler};
pub use fallback::method_not_allowed_handler;
pub use health::health_handler;
pub use vendors::{
    create_vendor_handler, delete_vendor_handler, update_vendor_handler, vendor_list_handler,
};
