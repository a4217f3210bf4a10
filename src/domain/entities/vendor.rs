//! Domain entity representing a tracked vendor.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A third-party service provider.
///
/// `id` and `created_at` are assigned by storage and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
    pub services: String,
    pub created_at: DateTime<Utc>,
}

impl Vendor {
    pub fn new(
        id: Uuid,
        name: String,
        contact: String,
        services: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            contact,
            services,
            created_at,
        }
    }
}

/// Fields supplied by the client when creating or replacing a vendor.
///
/// Used for both inserts and full updates; there are no partial updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorFields {
    pub name: String,
    pub contact: String,
    pub services: String,
}
