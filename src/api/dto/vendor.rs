//! DTOs for the vendor resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Vendor, VendorFields};
use crate::error::AppError;

pub const CREATE_REQUIRED: &str = "Name, contact, and services are required";
pub const UPDATE_REQUIRED: &str = "ID, name, contact, and services are required";
pub const DELETE_REQUIRED: &str = "Vendor ID is required";

/// Collects validated optional fields; `None` if any is still absent.
fn vendor_fields(
    name: Option<String>,
    contact: Option<String>,
    services: Option<String>,
) -> Option<VendorFields> {
    Some(VendorFields {
        name: name?,
        contact: contact?,
        services: services?,
    })
}

/// Body of `POST /api/vendors`.
///
/// Absent, `null` and empty fields are all rejected with the same message.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVendorRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub contact: Option<String>,

    #[validate(required, length(min = 1))]
    pub services: Option<String>,
}

impl CreateVendorRequest {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is missing or empty.
    pub fn into_fields(self) -> Result<VendorFields, AppError> {
        self.validate()
            .map_err(|e| AppError::invalid_fields(CREATE_REQUIRED, &e))?;

        vendor_fields(self.name, self.contact, self.services)
            .ok_or_else(|| AppError::bad_request(CREATE_REQUIRED, Value::Null))
    }
}

/// Body of `PUT /api/vendors`. Replaces every mutable field.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVendorRequest {
    #[validate(required)]
    pub id: Option<Uuid>,

    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub contact: Option<String>,

    #[validate(required, length(min = 1))]
    pub services: Option<String>,
}

impl UpdateVendorRequest {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if any field is missing or empty.
    pub fn into_parts(self) -> Result<(Uuid, VendorFields), AppError> {
        self.validate()
            .map_err(|e| AppError::invalid_fields(UPDATE_REQUIRED, &e))?;

        let missing = || AppError::bad_request(UPDATE_REQUIRED, Value::Null);
        let id = self.id.ok_or_else(missing)?;
        let fields =
            vendor_fields(self.name, self.contact, self.services).ok_or_else(missing)?;

        Ok((id, fields))
    }
}

/// Body of `DELETE /api/vendors`.
#[derive(Debug, Deserialize)]
pub struct DeleteVendorRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
}

impl DeleteVendorRequest {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is missing.
    pub fn into_id(self) -> Result<Uuid, AppError> {
        self.id
            .ok_or_else(|| AppError::bad_request(DELETE_REQUIRED, json!({"fields": ["id"]})))
    }
}

/// Vendor as exposed over the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorItem {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub services: String,
    pub created_at: DateTime<Utc>,
}

impl From<Vendor> for VendorItem {
    fn from(v: Vendor) -> Self {
        Self {
            id: v.id,
            name: v.name,
            contact: v.contact,
            services: v.services,
            created_at: v.created_at,
        }
    }
}

/// Response wrapping a single vendor with a status message.
#[derive(Debug, Serialize)]
pub struct VendorResponse {
    pub message: String,
    pub vendor: VendorItem,
}
