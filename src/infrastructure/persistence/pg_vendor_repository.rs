//! PostgreSQL implementation of vendor repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{Vendor, VendorFields};
use crate::domain::repositories::VendorRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct VendorRow {
    id: Uuid,
    name: String,
    contact: String,
    services: String,
    created_at: DateTime<Utc>,
}

impl From<VendorRow> for Vendor {
    fn from(r: VendorRow) -> Self {
        Vendor::new(r.id, r.name, r.contact, r.services, r.created_at)
    }
}

/// PostgreSQL repository for vendor records.
///
/// Deletes are hard deletes.
pub struct PgVendorRepository {
    pool: Arc<PgPool>,
}

impl PgVendorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VendorRepository for PgVendorRepository {
    async fn create(&self, fields: VendorFields) -> Result<Vendor, AppError> {
        let row = sqlx::query_as::<_, VendorRow>(
            r#"
            INSERT INTO vendors (name, contact, services)
            VALUES ($1, $2, $3)
            RETURNING id, name, contact, services, created_at
            "#,
        )
        .bind(fields.name)
        .bind(fields.contact)
        .bind(fields.services)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Vendor>, AppError> {
        let rows = sqlx::query_as::<_, VendorRow>(
            r#"
            SELECT id, name, contact, services, created_at
            FROM vendors
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Vendor::from).collect())
    }

    async fn update(&self, id: Uuid, fields: VendorFields) -> Result<Vendor, AppError> {
        let row = sqlx::query_as::<_, VendorRow>(
            r#"
            UPDATE vendors SET
                name     = $2,
                contact  = $3,
                services = $4
            WHERE id = $1
            RETURNING id, name, contact, services, created_at
            "#,
        )
        .bind(id)
        .bind(fields.name)
        .bind(fields.contact)
        .bind(fields.services)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Vendor::from)
            .ok_or_else(|| AppError::not_found("Vendor not found", json!({"id": id})))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Vendor not found", json!({"id": id})));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM vendors")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
