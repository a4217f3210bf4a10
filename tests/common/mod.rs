#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use vendor_registry::domain::entities::{NewUser, User, Vendor, VendorFields};
use vendor_registry::domain::repositories::{HealthRepository, UserRepository, VendorRepository};
use vendor_registry::error::AppError;
use vendor_registry::state::AppState;

/// In-memory user store with the same uniqueness rule as the `users` table.
#[derive(Default)]
pub struct InMemoryUsers {
    users: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(AppError::conflict(
                "User already exists",
                json!({"email": new_user.email}),
            ));
        }

        let user = User::new(
            Uuid::new_v4(),
            new_user.email,
            new_user.password_hash,
            Utc::now(),
        );
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.users.lock().unwrap().len() as i64)
    }
}

/// In-memory vendor store preserving insertion order.
#[derive(Default)]
pub struct InMemoryVendors {
    vendors: Mutex<Vec<Vendor>>,
}

impl InMemoryVendors {
    pub fn count_now(&self) -> usize {
        self.vendors.lock().unwrap().len()
    }
}

#[async_trait]
impl VendorRepository for InMemoryVendors {
    async fn create(&self, fields: VendorFields) -> Result<Vendor, AppError> {
        let vendor = Vendor::new(
            Uuid::new_v4(),
            fields.name,
            fields.contact,
            fields.services,
            Utc::now(),
        );
        self.vendors.lock().unwrap().push(vendor.clone());
        Ok(vendor)
    }

    async fn list(&self) -> Result<Vec<Vendor>, AppError> {
        Ok(self.vendors.lock().unwrap().clone())
    }

    async fn update(&self, id: Uuid, fields: VendorFields) -> Result<Vendor, AppError> {
        let mut vendors = self.vendors.lock().unwrap();
        let vendor = vendors
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::not_found("Vendor not found", json!({"id": id})))?;

        vendor.name = fields.name;
        vendor.contact = fields.contact;
        vendor.services = fields.services;
        Ok(vendor.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut vendors = self.vendors.lock().unwrap();
        let before = vendors.len();
        vendors.retain(|v| v.id != id);

        if vendors.len() == before {
            return Err(AppError::not_found("Vendor not found", json!({"id": id})));
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.vendors.lock().unwrap().len() as i64)
    }
}

/// Health probe with a fixed answer.
pub struct StaticHealth {
    pub healthy: bool,
}

#[async_trait]
impl HealthRepository for StaticHealth {
    async fn ping(&self) -> Result<(), AppError> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::internal("connection refused", serde_json::Value::Null))
        }
    }
}

/// Store whose every call fails the way an unreachable database does.
pub struct FailingStore;

fn storage_down() -> AppError {
    AppError::from(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl UserRepository for FailingStore {
    async fn create(&self, _new_user: NewUser) -> Result<User, AppError> {
        Err(storage_down())
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Err(storage_down())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Err(storage_down())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(storage_down())
    }
}

#[async_trait]
impl VendorRepository for FailingStore {
    async fn create(&self, _fields: VendorFields) -> Result<Vendor, AppError> {
        Err(storage_down())
    }

    async fn list(&self) -> Result<Vec<Vendor>, AppError> {
        Err(storage_down())
    }

    async fn update(&self, _id: Uuid, _fields: VendorFields) -> Result<Vendor, AppError> {
        Err(storage_down())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), AppError> {
        Err(storage_down())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(storage_down())
    }
}

pub struct TestContext {
    pub state: AppState,
    pub users: Arc<InMemoryUsers>,
    pub vendors: Arc<InMemoryVendors>,
}

pub fn create_test_state() -> TestContext {
    create_test_state_with_health(true)
}

pub fn create_test_state_with_health(healthy: bool) -> TestContext {
    let users = Arc::new(InMemoryUsers::default());
    let vendors = Arc::new(InMemoryVendors::default());

    let state = AppState::new(
        users.clone(),
        vendors.clone(),
        Arc::new(StaticHealth { healthy }),
    );

    TestContext {
        state,
        users,
        vendors,
    }
}

/// State whose repositories all fail.
pub fn create_failing_state() -> AppState {
    AppState::new(
        Arc::new(FailingStore),
        Arc::new(FailingStore),
        Arc::new(StaticHealth { healthy: false }),
    )
}
