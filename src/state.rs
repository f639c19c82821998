//! Shared application state for all routes. The store is built once at startup.

use crate::config::{Settings, StoreKind};
use crate::error::AppError;
use crate::store::{BookStore, MemoryStore, SqliteStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookStore>,
}

impl AppState {
    pub fn new(store: impl BookStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build the store selected by `settings`. The SQLite table is created here if absent.
    pub async fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let state = match settings.store {
            StoreKind::Memory if settings.seed_sample_books => Self::new(MemoryStore::with_sample_books()),
            StoreKind::Memory => Self::new(MemoryStore::new()),
            StoreKind::Sqlite => Self::new(SqliteStore::open(&settings.database_url).await?),
        };
        tracing::info!(store = ?settings.store, "book store ready");
        Ok(state)
    }
}
