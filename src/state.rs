//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, VendorService};
use crate::domain::repositories::{HealthRepository, UserRepository, VendorRepository};
use crate::infrastructure::persistence::{
    PgHealthRepository, PgUserRepository, PgVendorRepository,
};

/// Service handles shared across requests.
///
/// Repositories are held as trait objects so the same router can run against
/// PostgreSQL in production and in-memory fakes in tests. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
    pub vendor_service: Arc<VendorService<dyn VendorRepository>>,
    pub health: Arc<dyn HealthRepository>,
}

impl AppState {
    /// Builds state from explicit repository implementations.
    pub fn new(
        users: Arc<dyn UserRepository>,
        vendors: Arc<dyn VendorRepository>,
        health: Arc<dyn HealthRepository>,
    ) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(users)),
            vendor_service: Arc::new(VendorService::new(vendors)),
            health,
        }
    }

    /// Builds state backed by PostgreSQL repositories sharing one pool.
    pub fn from_pool(pool: PgPool) -> Self {
        let pool = Arc::new(pool);

        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgVendorRepository::new(pool.clone())),
            Arc::new(PgHealthRepository::new(pool)),
        )
    }
}
