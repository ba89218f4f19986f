/// Shared application state
use crate::middleware::Caller;
use crate::services::AuthService;
use cadence_storage::LocalStorageContext;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(pool: SqlitePool, auth_service: Arc<AuthService>) -> Self {
        Self { pool, auth_service }
    }

    /// Storage context acting on behalf of `caller`
    pub fn storage(&self, caller: &Caller) -> LocalStorageContext {
        LocalStorageContext::new(self.pool.clone(), caller.0.clone())
    }
}
