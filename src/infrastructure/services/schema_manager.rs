//! Schema manager - CRUD orchestration for prompt schemas
//!
//! Stateless beyond its configured defaults; every operation is a single
//! request/response against the injected [`SchemaStore`]. Serialization and
//! duplicate-id rejection are the store's responsibility.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{
    Clock, DomainError, PromptResponse, PromptSchema, SchemaStore, SystemClock,
};

/// Builtin fallback for the reserved default prompt type
pub const DEFAULT_PROMPT_TYPE: &str = "example_prompt";

/// Builtin fallback for the default instruction text
pub const DEFAULT_PROMPT_TEXT: &str = "This is an example prompt. The response schema should be \
     defined based on your specific use case and the expected structure of the response.";

/// Configurable fallbacks; any field left unset uses the builtin default
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaManagerDefaults {
    pub default_prompt_type: Option<String>,
    pub default_prompt_text: Option<String>,
    pub default_response_schema: Option<Value>,
}

/// Request to create a new prompt schema
#[derive(Debug, Clone, Default)]
pub struct CreateSchemaRequest {
    pub prompt_id: String,
    /// Falls back to the configured default type name when absent
    pub prompt_title: Option<String>,
    pub prompt_text: Option<String>,
    pub response_schema: Option<Value>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub model_instruction: Option<String>,
    pub additional_messages: Option<Vec<Map<String, Value>>>,
    pub is_public: Option<bool>,
    pub ranking: Option<f64>,
    pub created_by: Option<String>,
    pub provider_configs: Option<Map<String, Value>>,
}

/// Request to update an existing prompt schema; unset fields retain their
/// stored values
#[derive(Debug, Clone, Default)]
pub struct UpdateSchemaRequest {
    pub prompt_title: Option<String>,
    pub prompt_text: Option<String>,
    pub response_schema: Option<Value>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
    pub model_instruction: Option<String>,
    pub additional_messages: Option<Vec<Map<String, Value>>>,
    pub is_public: Option<bool>,
    pub ranking: Option<f64>,
    pub provider_configs: Option<Map<String, Value>>,
    pub updated_by: Option<String>,
}

/// Request to record a model output for a prompt
#[derive(Debug, Clone, Default)]
pub struct RecordResponseRequest {
    /// Generated (UUID v4) when absent
    pub response_id: Option<String>,
    pub prompt_id: String,
    pub raw_response: Option<Value>,
}

/// Manages prompt schemas and recorded responses against an injected store
#[derive(Debug)]
pub struct SchemaManager {
    store: Arc<dyn SchemaStore>,
    clock: Arc<dyn Clock>,
    default_prompt_type: String,
    default_prompt_text: String,
    default_response_schema: Value,
}

impl SchemaManager {
    pub fn new(store: Arc<dyn SchemaStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            default_prompt_type: DEFAULT_PROMPT_TYPE.to_string(),
            default_prompt_text: DEFAULT_PROMPT_TEXT.to_string(),
            default_response_schema: builtin_response_schema(),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_defaults(mut self, defaults: SchemaManagerDefaults) -> Self {
        if let Some(prompt_type) = defaults.default_prompt_type {
            self.default_prompt_type = prompt_type;
        }
        if let Some(prompt_text) = defaults.default_prompt_text {
            self.default_prompt_text = prompt_text;
        }
        if let Some(schema) = defaults.default_response_schema {
            self.default_response_schema = schema;
        }
        self
    }

    pub fn default_prompt_type(&self) -> &str {
        &self.default_prompt_type
    }

    /// Fetch a schema by id.
    ///
    /// The reserved default type is served from the configured defaults
    /// without touching the store and cannot be modified.
    pub async fn get(&self, prompt_id: &str) -> Result<PromptSchema, DomainError> {
        debug!(prompt_id = %prompt_id, "Fetching prompt schema");

        if prompt_id == self.default_prompt_type {
            return self.builtin_schema();
        }

        let record = self
            .store
            .get_schema(prompt_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("Prompt schema '{}' not found", prompt_id))
            })?;

        PromptSchema::from_record(record)
    }

    /// Instruction text of the schema with the given id
    pub async fn get_prompt_text(&self, prompt_id: &str) -> Result<String, DomainError> {
        Ok(self.get(prompt_id).await?.main_prompt().to_string())
    }

    /// All stored schemas (the virtual default type is not included)
    pub async fn list(&self) -> Result<Vec<PromptSchema>, DomainError> {
        self.store
            .list_schemas()
            .await?
            .into_iter()
            .map(PromptSchema::from_record)
            .collect()
    }

    /// Validate and persist a new schema.
    ///
    /// Construction failures surface as `Validation` before the store is
    /// ever invoked; a duplicate id is the store's `Conflict`.
    pub async fn create(
        &self,
        request: CreateSchemaRequest,
    ) -> Result<PromptSchema, DomainError> {
        self.reject_default_type(&request.prompt_id, "modify")?;

        let title = request
            .prompt_title
            .unwrap_or_else(|| self.default_prompt_type.clone());
        let text = request
            .prompt_text
            .ok_or_else(|| DomainError::validation("prompt_text is required"))?;
        let response_schema = request
            .response_schema
            .ok_or_else(|| DomainError::validation("response_schema is required"))?;

        let mut schema = PromptSchema::new(request.prompt_id, title, text, response_schema)?
            .with_created_at(self.clock.now_epoch_secs());

        if let Some(description) = request.description {
            schema = schema.with_description(description);
        }
        if let Some(categories) = request.categories {
            schema = schema.with_categories(categories);
        }
        if let Some(instruction) = request.model_instruction {
            schema = schema.with_model_instruction(instruction);
        }
        if let Some(messages) = request.additional_messages {
            schema = schema.with_additional_messages(messages);
        }
        if let Some(is_public) = request.is_public {
            schema = schema.with_is_public(is_public);
        }
        if let Some(ranking) = request.ranking {
            schema = schema.with_ranking(ranking);
        }
        if let Some(created_by) = request.created_by {
            schema = schema.with_created_by(created_by);
        }
        if let Some(configs) = request.provider_configs {
            schema = schema.with_provider_configs(configs);
        }

        let stored = self.store.create_schema(schema.to_record()).await?;
        info!(prompt_id = %stored.prompt_id, "Created prompt schema");

        PromptSchema::from_record(stored)
    }

    /// Merge the supplied fields over the stored schema, stamp
    /// `last_updated`, revalidate, and persist.
    pub async fn update(
        &self,
        prompt_id: &str,
        request: UpdateSchemaRequest,
    ) -> Result<PromptSchema, DomainError> {
        self.reject_default_type(prompt_id, "modify")?;

        let record = self
            .store
            .get_schema(prompt_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("Prompt schema '{}' not found", prompt_id))
            })?;
        let mut schema = PromptSchema::from_record(record)?;

        if let Some(title) = request.prompt_title {
            schema.set_title(title);
        }
        if let Some(text) = request.prompt_text {
            schema.set_main_prompt(text);
        }
        if let Some(response_schema) = request.response_schema {
            schema.set_response_schema(response_schema);
        }
        if let Some(description) = request.description {
            schema.set_description(description);
        }
        if let Some(categories) = request.categories {
            schema.set_categories(categories);
        }
        if let Some(instruction) = request.model_instruction {
            schema.set_model_instruction(Some(instruction));
        }
        if let Some(messages) = request.additional_messages {
            schema.set_additional_messages(Some(messages));
        }
        if let Some(is_public) = request.is_public {
            schema.set_is_public(is_public);
        }
        if let Some(ranking) = request.ranking {
            schema.set_ranking(ranking);
        }
        if let Some(configs) = request.provider_configs {
            schema.set_provider_configs(configs);
        }

        schema.set_last_updated(self.clock.now_epoch_secs(), request.updated_by);
        schema.validate()?;

        let stored = self.store.update_schema(schema.to_record()).await?;
        info!(prompt_id = %stored.prompt_id, "Updated prompt schema");

        PromptSchema::from_record(stored)
    }

    /// Remove a schema. Removing an absent id succeeds; missing-vs-removed is
    /// deliberately not distinguished.
    pub async fn delete(&self, prompt_id: &str) -> Result<bool, DomainError> {
        self.reject_default_type(prompt_id, "delete")?;

        self.store.delete_schema(prompt_id).await?;
        info!(prompt_id = %prompt_id, "Deleted prompt schema");
        Ok(true)
    }

    /// Validate and persist a recorded model output.
    ///
    /// `raw_response` conformance to the owning schema's `response_schema` is
    /// NOT checked; only its presence and JSON-object shape are. When the
    /// owning schema exists, its usage telemetry is bumped.
    pub async fn record_response(
        &self,
        request: RecordResponseRequest,
    ) -> Result<PromptResponse, DomainError> {
        let response_id = request
            .response_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let raw_response = request
            .raw_response
            .ok_or_else(|| DomainError::validation("raw_response is required"))?;

        let response = PromptResponse::new(response_id, request.prompt_id, raw_response)?
            .with_created_at(self.clock.now_epoch_secs());

        let stored = self.store.create_response(response.to_record()).await?;
        debug!(response_id = %stored.response_id, prompt_id = %stored.prompt_id,
               "Recorded prompt response");

        // Referential integrity is not enforced: telemetry is only bumped
        // when the owning schema is actually stored.
        if let Some(record) = self.store.get_schema(&stored.prompt_id).await? {
            let mut schema = PromptSchema::from_record(record)?;
            schema.mark_used(self.clock.now_epoch_secs());
            self.store.update_schema(schema.to_record()).await?;
        }

        PromptResponse::from_record(stored)
    }

    /// Fetch a recorded response by id
    pub async fn get_response(
        &self,
        response_id: &str,
    ) -> Result<PromptResponse, DomainError> {
        let record = self
            .store
            .get_response(response_id)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("Prompt response '{}' not found", response_id))
            })?;

        PromptResponse::from_record(record)
    }

    fn builtin_schema(&self) -> Result<PromptSchema, DomainError> {
        // Virtual record served from configuration, never persisted
        PromptSchema::new(
            self.default_prompt_type.clone(),
            self.default_prompt_type.clone(),
            self.default_prompt_text.clone(),
            self.default_response_schema.clone(),
        )
        .map(|schema| schema.with_created_at(self.clock.now_epoch_secs()))
    }

    fn reject_default_type(&self, prompt_id: &str, action: &str) -> Result<(), DomainError> {
        if prompt_id == self.default_prompt_type {
            return Err(DomainError::validation(format!(
                "Cannot {} default prompt type: {}",
                action, self.default_prompt_type
            )));
        }
        Ok(())
    }
}

fn builtin_response_schema() -> Value {
    json!({
        "type": "object",
        "description": "Dynamic response schema - define based on your needs",
        "additionalProperties": true
    })
}
