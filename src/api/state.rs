//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::SchemaManager;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub schema_manager: Arc<SchemaManager>,
}

impl AppState {
    pub fn new(schema_manager: Arc<SchemaManager>) -> Self {
        Self { schema_manager }
    }
}
