//! Fallback for methods a route does not support.

use crate::error::AppError;

/// Answers 405 with the standard error body.
///
/// Attached with [`axum::routing::MethodRouter::fallback`] so each route keeps
/// its own method table.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed()
}
