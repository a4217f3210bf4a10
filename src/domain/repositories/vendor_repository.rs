//! Repository trait for vendor records.

use crate::domain::entities::{Vendor, VendorFields};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for vendor CRUD.
///
/// Each call is an independent statement; nothing here spans a transaction.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVendorRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Inserts a vendor and returns it with its generated id and timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, fields: VendorFields) -> Result<Vendor, AppError>;

    /// Returns every vendor, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Vendor>, AppError>;

    /// Replaces the mutable fields of a vendor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no vendor has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: Uuid, fields: VendorFields) -> Result<Vendor, AppError>;

    /// Deletes a vendor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no vendor has this id.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Counts stored vendors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
