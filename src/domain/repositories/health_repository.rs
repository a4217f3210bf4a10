//! Repository trait for storage liveness checks.

use crate::error::AppError;
use async_trait::async_trait;

/// Probes the backing store for the health endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial round-trip query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
