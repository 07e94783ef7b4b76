//! Schema store collaborator trait
//!
//! The manager delegates all durable reads/writes through this trait; the
//! store owns identity (duplicate rejection) and atomicity per call.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::record::{PromptResponseRecord, PromptSchemaRecord};

/// Persistence collaborator for prompt schema and prompt response records
#[async_trait]
pub trait SchemaStore: Send + Sync + Debug {
    /// Fetch a schema record by id, `None` when absent
    async fn get_schema(&self, prompt_id: &str)
        -> Result<Option<PromptSchemaRecord>, DomainError>;

    /// All stored schema records
    async fn list_schemas(&self) -> Result<Vec<PromptSchemaRecord>, DomainError>;

    /// Persist a new schema record; duplicate ids are rejected by the store
    async fn create_schema(
        &self,
        record: PromptSchemaRecord,
    ) -> Result<PromptSchemaRecord, DomainError>;

    /// Replace an existing schema record
    async fn update_schema(
        &self,
        record: PromptSchemaRecord,
    ) -> Result<PromptSchemaRecord, DomainError>;

    /// Remove a schema record. Removing an absent id is not an error.
    async fn delete_schema(&self, prompt_id: &str) -> Result<(), DomainError>;

    /// Persist a new response record
    async fn create_response(
        &self,
        record: PromptResponseRecord,
    ) -> Result<PromptResponseRecord, DomainError>;

    /// Fetch a response record by id, `None` when absent
    async fn get_response(
        &self,
        response_id: &str,
    ) -> Result<Option<PromptResponseRecord>, DomainError>;
}
