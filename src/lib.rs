//! Prompt Schema Service
//!
//! Persistence and validation layer for LLM prompt schemas: a validated data
//! model for prompt configurations and recorded model outputs, a manager
//! offering CRUD against an injected store, and a thin HTTP surface mapping
//! failures to status codes.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use domain::SystemClock;
use infrastructure::schema::StorageSchemaStore;
use infrastructure::services::SchemaManager;
use infrastructure::storage::InMemoryStorage;

/// Wire up a schema manager over the in-memory storage engine
pub fn create_schema_manager(config: &AppConfig) -> Arc<SchemaManager> {
    let store = StorageSchemaStore::new(
        Arc::new(InMemoryStorage::new()),
        Arc::new(InMemoryStorage::new()),
    );

    Arc::new(
        SchemaManager::new(Arc::new(store))
            .with_clock(Arc::new(SystemClock))
            .with_defaults(config.manager.clone()),
    )
}
