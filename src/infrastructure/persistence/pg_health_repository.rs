//! PostgreSQL connectivity probe.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::HealthRepository;
use crate::error::AppError;

/// Issues `SELECT 1` against the pool.
pub struct PgHealthRepository {
    pool: Arc<PgPool>,
}

impl PgHealthRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthRepository for PgHealthRepository {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
