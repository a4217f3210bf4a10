//! API route configuration.
//!
//! Each path owns a method table; any method not listed falls through to
//! [`method_not_allowed_handler`], which answers 405 with a JSON body.

use crate::api::handlers::{
    create_vendor_handler, delete_vendor_handler, login_handler, method_not_allowed_handler,
    register_handler, update_vendor_handler, vendor_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Registration and login.
///
/// # Endpoints
///
/// - `POST /auth/register` - Create an account
/// - `POST /auth/login`    - Check credentials
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/auth/register",
            post(register_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/auth/login",
            post(login_handler).fallback(method_not_allowed_handler),
        )
}

/// Vendor CRUD, dispatched by method on a single path.
///
/// # Endpoints
///
/// - `GET    /vendors` - List all vendors
/// - `POST   /vendors` - Create a vendor
/// - `PUT    /vendors` - Replace a vendor (id in body)
/// - `DELETE /vendors` - Delete a vendor (id in body)
///
/// `HEAD` is answered with 405 rather than derived from `GET`.
pub fn vendor_routes() -> Router<AppState> {
    Router::new().route(
        "/vendors",
        get(vendor_list_handler)
            .post(create_vendor_handler)
            .put(update_vendor_handler)
            .delete(delete_vendor_handler)
            .head(method_not_allowed_handler)
            .fallback(method_not_allowed_handler),
    )
}

/// All API routes without rate limiting, for mounting under `/api`.
pub fn routes() -> Router<AppState> {
    auth_routes().merge(vendor_routes())
}
