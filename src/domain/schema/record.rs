//! Storage-shaped records for prompt schemas and prompt responses
//!
//! Field names match the persisted names. External aliases (`prompt_type`,
//! `prompt_text`, `updated_at`) are accepted on input and never emitted on
//! output, so serializing always yields the storage shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::storage::StorageEntity;

/// Persisted shape of a prompt schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSchemaRecord {
    pub prompt_id: String,
    #[serde(alias = "prompt_type")]
    pub prompt_title: String,
    #[serde(default)]
    pub prompt_description: String,
    #[serde(default)]
    pub prompt_categories: Vec<String>,
    #[serde(alias = "prompt_text")]
    pub main_prompt: String,
    #[serde(default)]
    pub model_instruction: Option<String>,
    #[serde(default)]
    pub additional_messages: Option<Vec<Map<String, Value>>>,
    pub response_schema: Value,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub ranking: f64,
    #[serde(default)]
    pub last_used: Option<i64>,
    #[serde(default)]
    pub usage_count: u64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, alias = "updated_at")]
    pub last_updated: Option<i64>,
    #[serde(default)]
    pub last_updated_by: Option<String>,
    #[serde(default)]
    pub provider_configs: Map<String, Value>,
}

impl StorageEntity for PromptSchemaRecord {
    type Key = String;

    fn key(&self) -> &Self::Key {
        &self.prompt_id
    }
}

/// Persisted shape of a recorded model output
///
/// Unknown extra fields on input are tolerated and dropped, not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptResponseRecord {
    pub response_id: String,
    pub prompt_id: String,
    pub raw_response: Value,
    #[serde(default)]
    pub created_at: i64,
}

impl StorageEntity for PromptResponseRecord {
    type Key = String;

    fn key(&self) -> &Self::Key {
        &self.response_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_schema_record_defaults_filled() {
        let record: PromptSchemaRecord = serde_json::from_value(json!({
            "prompt_id": "p1",
            "prompt_title": "Summarizer",
            "main_prompt": "Summarize this.",
            "response_schema": {"type": "object"}
        }))
        .unwrap();

        assert_eq!(record.prompt_description, "");
        assert!(record.prompt_categories.is_empty());
        assert_eq!(record.ranking, 0.0);
        assert_eq!(record.usage_count, 0);
        assert!(!record.is_public);
        assert!(record.model_instruction.is_none());
        assert!(record.last_updated.is_none());
        assert!(record.provider_configs.is_empty());
    }

    #[test]
    fn test_schema_record_accepts_external_aliases() {
        let aliased: PromptSchemaRecord = serde_json::from_value(json!({
            "prompt_id": "p1",
            "prompt_type": "Summarizer",
            "prompt_text": "Summarize this.",
            "updated_at": 1_700_000_100,
            "response_schema": {"type": "object"}
        }))
        .unwrap();

        let storage_named: PromptSchemaRecord = serde_json::from_value(json!({
            "prompt_id": "p1",
            "prompt_title": "Summarizer",
            "main_prompt": "Summarize this.",
            "last_updated": 1_700_000_100,
            "response_schema": {"type": "object"}
        }))
        .unwrap();

        assert_eq!(aliased, storage_named);
    }

    #[test]
    fn test_schema_record_serializes_storage_names() {
        let record: PromptSchemaRecord = serde_json::from_value(json!({
            "prompt_id": "p1",
            "prompt_type": "Summarizer",
            "prompt_text": "Summarize this.",
            "response_schema": {"type": "object"}
        }))
        .unwrap();

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("prompt_title").is_some());
        assert!(value.get("main_prompt").is_some());
        assert!(value.get("prompt_type").is_none());
        assert!(value.get("prompt_text").is_none());
        assert!(value.get("updated_at").is_none());
    }

    #[test]
    fn test_schema_record_missing_required_field_rejected() {
        let result: Result<PromptSchemaRecord, _> = serde_json::from_value(json!({
            "prompt_id": "p1",
            "prompt_title": "Summarizer",
            "main_prompt": "Summarize this."
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_response_record_tolerates_extra_fields() {
        let record: PromptResponseRecord = serde_json::from_value(json!({
            "response_id": "r1",
            "prompt_id": "p1",
            "raw_response": {"summary": "ok"},
            "created_at": 1_700_000_000,
            "unexpected_field": "ignored"
        }))
        .unwrap();

        assert_eq!(record.response_id, "r1");
        assert_eq!(record.raw_response, json!({"summary": "ok"}));
    }

    #[test]
    fn test_schema_record_key() {
        let record: PromptSchemaRecord = serde_json::from_value(json!({
            "prompt_id": "p1",
            "prompt_title": "Summarizer",
            "main_prompt": "Summarize this.",
            "response_schema": {"type": "object"}
        }))
        .unwrap();
        assert_eq!(record.key(), "p1");
    }
}
