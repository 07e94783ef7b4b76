//! Storage-backed schema store implementation

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::schema::{PromptResponseRecord, PromptSchemaRecord, SchemaStore};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// [`SchemaStore`] backed by two generic [`Storage`] handles, one per record
/// kind. Duplicate-id rejection comes from the underlying engine's `create`.
#[derive(Debug)]
pub struct StorageSchemaStore {
    schemas: Arc<dyn Storage<PromptSchemaRecord>>,
    responses: Arc<dyn Storage<PromptResponseRecord>>,
}

impl StorageSchemaStore {
    pub fn new(
        schemas: Arc<dyn Storage<PromptSchemaRecord>>,
        responses: Arc<dyn Storage<PromptResponseRecord>>,
    ) -> Self {
        Self { schemas, responses }
    }
}

#[async_trait]
impl SchemaStore for StorageSchemaStore {
    async fn get_schema(
        &self,
        prompt_id: &str,
    ) -> Result<Option<PromptSchemaRecord>, DomainError> {
        self.schemas.get(&prompt_id.to_string()).await
    }

    async fn list_schemas(&self) -> Result<Vec<PromptSchemaRecord>, DomainError> {
        let mut records = self.schemas.list().await?;
        records.sort_by(|a, b| a.prompt_id.cmp(&b.prompt_id));
        Ok(records)
    }

    async fn create_schema(
        &self,
        record: PromptSchemaRecord,
    ) -> Result<PromptSchemaRecord, DomainError> {
        self.schemas.create(record).await
    }

    async fn update_schema(
        &self,
        record: PromptSchemaRecord,
    ) -> Result<PromptSchemaRecord, DomainError> {
        self.schemas.update(record).await
    }

    async fn delete_schema(&self, prompt_id: &str) -> Result<(), DomainError> {
        // Deleting an absent id is a no-op; presence is deliberately not
        // reported (see the manager's delete contract).
        self.schemas.delete(&prompt_id.to_string()).await?;
        Ok(())
    }

    async fn create_response(
        &self,
        record: PromptResponseRecord,
    ) -> Result<PromptResponseRecord, DomainError> {
        self.responses.create(record).await
    }

    async fn get_response(
        &self,
        response_id: &str,
    ) -> Result<Option<PromptResponseRecord>, DomainError> {
        self.responses.get(&response_id.to_string()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;
    use serde_json::json;

    fn store() -> StorageSchemaStore {
        StorageSchemaStore::new(
            Arc::new(InMemoryStorage::new()),
            Arc::new(InMemoryStorage::new()),
        )
    }

    fn schema_record(id: &str) -> PromptSchemaRecord {
        serde_json::from_value(json!({
            "prompt_id": id,
            "prompt_title": "Summarizer",
            "main_prompt": "Summarize this.",
            "response_schema": {"type": "object"},
            "created_at": 1_700_000_000
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_schema_crud() {
        let store = store();

        store.create_schema(schema_record("p1")).await.unwrap();
        assert!(store.get_schema("p1").await.unwrap().is_some());

        let duplicate = store.create_schema(schema_record("p1")).await;
        assert!(matches!(duplicate, Err(DomainError::Conflict { .. })));

        let mut updated = schema_record("p1");
        updated.main_prompt = "Summarize briefly.".to_string();
        let stored = store.update_schema(updated).await.unwrap();
        assert_eq!(stored.main_prompt, "Summarize briefly.");

        store.delete_schema("p1").await.unwrap();
        assert!(store.get_schema("p1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_absent_is_no_op() {
        let store = store();
        assert!(store.delete_schema("missing").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_sorted_by_id() {
        let store = store();
        store.create_schema(schema_record("p2")).await.unwrap();
        store.create_schema(schema_record("p1")).await.unwrap();

        let ids: Vec<String> = store
            .list_schemas()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.prompt_id)
            .collect();
        assert_eq!(ids, vec!["p1", "p2"]);
    }

    #[tokio::test]
    async fn test_response_round_trip() {
        let store = store();
        let record = PromptResponseRecord {
            response_id: "r1".to_string(),
            prompt_id: "p1".to_string(),
            raw_response: json!({"summary": "ok"}),
            created_at: 1_700_000_000,
        };

        store.create_response(record.clone()).await.unwrap();
        assert_eq!(store.get_response("r1").await.unwrap(), Some(record));
    }
}
