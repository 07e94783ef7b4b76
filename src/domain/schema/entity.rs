//! Validated prompt schema entity

use serde_json::{Map, Value};

use crate::domain::DomainError;

use super::record::PromptSchemaRecord;

/// A reusable prompt configuration: instruction text, the JSON-schema-like
/// shape expected of generated responses, and usage metadata.
///
/// `response_schema`, `provider_configs` and `additional_messages` entries are
/// opaque JSON; nothing in this layer interprets their contents.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSchema {
    prompt_id: String,
    prompt_title: String,
    prompt_description: String,
    prompt_categories: Vec<String>,
    main_prompt: String,
    model_instruction: Option<String>,
    additional_messages: Option<Vec<Map<String, Value>>>,
    response_schema: Value,
    is_public: bool,
    ranking: f64,
    last_used: Option<i64>,
    usage_count: u64,
    created_at: i64,
    created_by: Option<String>,
    last_updated: Option<i64>,
    last_updated_by: Option<String>,
    provider_configs: Map<String, Value>,
}

impl PromptSchema {
    /// Create a new PromptSchema with required fields, validating them.
    ///
    /// `created_at` is stamped with the wall clock; callers holding an
    /// injected [`Clock`](crate::domain::Clock) override it via
    /// [`with_created_at`](Self::with_created_at).
    pub fn new(
        prompt_id: impl Into<String>,
        prompt_title: impl Into<String>,
        main_prompt: impl Into<String>,
        response_schema: Value,
    ) -> Result<Self, DomainError> {
        let schema = Self {
            prompt_id: prompt_id.into(),
            prompt_title: prompt_title.into(),
            prompt_description: String::new(),
            prompt_categories: Vec::new(),
            main_prompt: main_prompt.into(),
            model_instruction: None,
            additional_messages: None,
            response_schema,
            is_public: false,
            ranking: 0.0,
            last_used: None,
            usage_count: 0,
            created_at: chrono::Utc::now().timestamp(),
            created_by: None,
            last_updated: None,
            last_updated_by: None,
            provider_configs: Map::new(),
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Check required-field invariants
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.prompt_id.is_empty() {
            return Err(DomainError::validation("prompt_id must not be empty"));
        }
        if self.prompt_title.is_empty() {
            return Err(DomainError::validation("prompt_title must not be empty"));
        }
        if self.main_prompt.is_empty() {
            return Err(DomainError::validation("main_prompt must not be empty"));
        }
        if !self.response_schema.is_object() {
            return Err(DomainError::validation(
                "response_schema must be a JSON object",
            ));
        }
        Ok(())
    }

    /// Build a validated schema from its storage-shaped record
    pub fn from_record(record: PromptSchemaRecord) -> Result<Self, DomainError> {
        let schema = Self {
            prompt_id: record.prompt_id,
            prompt_title: record.prompt_title,
            prompt_description: record.prompt_description,
            prompt_categories: record.prompt_categories,
            main_prompt: record.main_prompt,
            model_instruction: record.model_instruction,
            additional_messages: record.additional_messages,
            response_schema: record.response_schema,
            is_public: record.is_public,
            ranking: record.ranking,
            last_used: record.last_used,
            usage_count: record.usage_count,
            created_at: record.created_at,
            created_by: record.created_by,
            last_updated: record.last_updated,
            last_updated_by: record.last_updated_by,
            provider_configs: record.provider_configs,
        };
        schema.validate()?;
        Ok(schema)
    }

    /// Convert to the storage-shaped record. Total and lossless.
    pub fn to_record(&self) -> PromptSchemaRecord {
        PromptSchemaRecord {
            prompt_id: self.prompt_id.clone(),
            prompt_title: self.prompt_title.clone(),
            prompt_description: self.prompt_description.clone(),
            prompt_categories: self.prompt_categories.clone(),
            main_prompt: self.main_prompt.clone(),
            model_instruction: self.model_instruction.clone(),
            additional_messages: self.additional_messages.clone(),
            response_schema: self.response_schema.clone(),
            is_public: self.is_public,
            ranking: self.ranking,
            last_used: self.last_used,
            usage_count: self.usage_count,
            created_at: self.created_at,
            created_by: self.created_by.clone(),
            last_updated: self.last_updated,
            last_updated_by: self.last_updated_by.clone(),
            provider_configs: self.provider_configs.clone(),
        }
    }

    // Builders

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.prompt_description = description.into();
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.prompt_categories = categories;
        self
    }

    pub fn with_model_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.model_instruction = Some(instruction.into());
        self
    }

    pub fn with_additional_messages(mut self, messages: Vec<Map<String, Value>>) -> Self {
        self.additional_messages = Some(messages);
        self
    }

    pub fn with_is_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn with_ranking(mut self, ranking: f64) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn with_created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = Some(created_by.into());
        self
    }

    pub fn with_provider_configs(mut self, configs: Map<String, Value>) -> Self {
        self.provider_configs = configs;
        self
    }

    // Getters

    pub fn prompt_id(&self) -> &str {
        &self.prompt_id
    }

    pub fn prompt_title(&self) -> &str {
        &self.prompt_title
    }

    pub fn prompt_description(&self) -> &str {
        &self.prompt_description
    }

    pub fn prompt_categories(&self) -> &[String] {
        &self.prompt_categories
    }

    pub fn main_prompt(&self) -> &str {
        &self.main_prompt
    }

    pub fn model_instruction(&self) -> Option<&str> {
        self.model_instruction.as_deref()
    }

    pub fn additional_messages(&self) -> Option<&[Map<String, Value>]> {
        self.additional_messages.as_deref()
    }

    pub fn response_schema(&self) -> &Value {
        &self.response_schema
    }

    pub fn is_public(&self) -> bool {
        self.is_public
    }

    pub fn ranking(&self) -> f64 {
        self.ranking
    }

    pub fn last_used(&self) -> Option<i64> {
        self.last_used
    }

    pub fn usage_count(&self) -> u64 {
        self.usage_count
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn created_by(&self) -> Option<&str> {
        self.created_by.as_deref()
    }

    pub fn last_updated(&self) -> Option<i64> {
        self.last_updated
    }

    pub fn last_updated_by(&self) -> Option<&str> {
        self.last_updated_by.as_deref()
    }

    pub fn provider_configs(&self) -> &Map<String, Value> {
        &self.provider_configs
    }

    // Mutators (used by the update merge path; the manager revalidates the
    // full record after merging)

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.prompt_title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.prompt_description = description.into();
    }

    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.prompt_categories = categories;
    }

    pub fn set_main_prompt(&mut self, main_prompt: impl Into<String>) {
        self.main_prompt = main_prompt.into();
    }

    pub fn set_model_instruction(&mut self, instruction: Option<String>) {
        self.model_instruction = instruction;
    }

    pub fn set_additional_messages(&mut self, messages: Option<Vec<Map<String, Value>>>) {
        self.additional_messages = messages;
    }

    pub fn set_response_schema(&mut self, schema: Value) {
        self.response_schema = schema;
    }

    pub fn set_is_public(&mut self, is_public: bool) {
        self.is_public = is_public;
    }

    pub fn set_ranking(&mut self, ranking: f64) {
        self.ranking = ranking;
    }

    pub fn set_provider_configs(&mut self, configs: Map<String, Value>) {
        self.provider_configs = configs;
    }

    pub fn set_last_updated(&mut self, at: i64, by: Option<String>) {
        self.last_updated = Some(at);
        if by.is_some() {
            self.last_updated_by = by;
        }
    }

    /// Record one use of this prompt at the given instant
    pub fn mark_used(&mut self, at: i64) {
        self.last_used = Some(at);
        self.usage_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object_schema() -> Value {
        json!({"type": "object", "properties": {"summary": {"type": "string"}}})
    }

    fn sample_record() -> PromptSchemaRecord {
        serde_json::from_value(json!({
            "prompt_id": "p1",
            "prompt_title": "Summarizer",
            "prompt_description": "Summarizes audio transcripts",
            "prompt_categories": ["audio", "summarization"],
            "main_prompt": "Summarize this.",
            "model_instruction": "Be concise.",
            "additional_messages": [{"role": "system", "content": "You summarize."}],
            "response_schema": {"type": "object"},
            "is_public": true,
            "ranking": 0.8,
            "last_used": 1_700_000_500,
            "usage_count": 12,
            "created_at": 1_700_000_000,
            "created_by": "user-1",
            "last_updated": 1_700_000_400,
            "last_updated_by": "user-2",
            "provider_configs": {"gemini": {"temperature": 0.2}}
        }))
        .unwrap()
    }

    #[test]
    fn test_new_fills_defaults() {
        let schema = PromptSchema::new("p1", "Summarizer", "Summarize this.", object_schema())
            .unwrap();

        assert_eq!(schema.prompt_id(), "p1");
        assert_eq!(schema.prompt_description(), "");
        assert!(schema.prompt_categories().is_empty());
        assert_eq!(schema.ranking(), 0.0);
        assert_eq!(schema.usage_count(), 0);
        assert!(!schema.is_public());
        assert!(schema.last_updated().is_none());
        assert!(schema.created_at() > 0);
    }

    #[test]
    fn test_new_rejects_empty_required_fields() {
        assert!(PromptSchema::new("", "T", "text", object_schema()).is_err());
        assert!(PromptSchema::new("p1", "", "text", object_schema()).is_err());
        assert!(PromptSchema::new("p1", "T", "", object_schema()).is_err());
    }

    #[test]
    fn test_new_rejects_non_object_response_schema() {
        let result = PromptSchema::new("p1", "T", "text", json!("not a schema"));
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_with_created_at_overrides_clock() {
        let schema = PromptSchema::new("p1", "T", "text", object_schema())
            .unwrap()
            .with_created_at(1_700_000_000);
        assert_eq!(schema.created_at(), 1_700_000_000);
    }

    #[test]
    fn test_round_trip_record_to_entity_to_record() {
        let record = sample_record();
        let schema = PromptSchema::from_record(record.clone()).unwrap();
        assert_eq!(schema.to_record(), record);
    }

    #[test]
    fn test_round_trip_entity_to_record_to_entity() {
        let schema = PromptSchema::new("p1", "Summarizer", "Summarize this.", object_schema())
            .unwrap()
            .with_created_at(1_700_000_000)
            .with_categories(vec!["audio".to_string()])
            .with_ranking(0.4)
            .with_created_by("user-1");

        let back = PromptSchema::from_record(schema.to_record()).unwrap();
        assert_eq!(back, schema);
    }

    #[test]
    fn test_from_record_validates() {
        let mut record = sample_record();
        record.main_prompt = String::new();
        assert!(PromptSchema::from_record(record).is_err());
    }

    #[test]
    fn test_mark_used_bumps_telemetry() {
        let mut schema =
            PromptSchema::new("p1", "T", "text", object_schema()).unwrap();
        schema.mark_used(1_700_000_100);
        schema.mark_used(1_700_000_200);

        assert_eq!(schema.usage_count(), 2);
        assert_eq!(schema.last_used(), Some(1_700_000_200));
    }

    #[test]
    fn test_set_last_updated_keeps_prior_actor_when_absent() {
        let mut schema =
            PromptSchema::new("p1", "T", "text", object_schema()).unwrap();
        schema.set_last_updated(1_700_000_100, Some("user-2".to_string()));
        schema.set_last_updated(1_700_000_200, None);

        assert_eq!(schema.last_updated(), Some(1_700_000_200));
        assert_eq!(schema.last_updated_by(), Some("user-2"));
    }
}
