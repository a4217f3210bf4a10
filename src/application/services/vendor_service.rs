//! Vendor management service.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Vendor, VendorFields};
use crate::domain::repositories::VendorRepository;
use crate::error::AppError;

/// Service for creating, listing, updating and deleting vendors.
///
/// Operations are independent of each other; none of them runs inside a
/// transaction and concurrent writes resolve at the database.
pub struct VendorService<R: VendorRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: VendorRepository + ?Sized> VendorService<R> {
    /// Creates a new vendor service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a vendor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_vendor(&self, fields: VendorFields) -> Result<Vendor, AppError> {
        let vendor = self.repository.create(fields).await?;

        metrics::counter!("vendor_operations_total", "op" => "create").increment(1);
        tracing::info!(vendor_id = %vendor.id, "Vendor created");

        Ok(vendor)
    }

    /// Lists all vendors, oldest first, unpaginated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_vendors(&self) -> Result<Vec<Vendor>, AppError> {
        self.repository.list().await
    }

    /// Replaces a vendor's name, contact and services.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vendor does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_vendor(&self, id: Uuid, fields: VendorFields) -> Result<Vendor, AppError> {
        let vendor = self.repository.update(id, fields).await?;

        metrics::counter!("vendor_operations_total", "op" => "update").increment(1);
        tracing::info!(vendor_id = %vendor.id, "Vendor updated");

        Ok(vendor)
    }

    /// Deletes a vendor.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the vendor does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_vendor(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;

        metrics::counter!("vendor_operations_total", "op" => "delete").increment(1);
        tracing::info!(vendor_id = %id, "Vendor deleted");

        Ok(())
    }

    /// Counts stored vendors.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_vendors(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}
