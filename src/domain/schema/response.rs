//! Validated prompt response entity

use serde_json::Value;

use crate::domain::DomainError;

use super::record::PromptResponseRecord;

/// One recorded model output for a given prompt.
///
/// The shape of `raw_response` is described by the owning schema's
/// `response_schema`, but conformance is not checked here; see the manager
/// for the recorded decision.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptResponse {
    response_id: String,
    prompt_id: String,
    raw_response: Value,
    created_at: i64,
}

impl PromptResponse {
    /// Create a new validated response; `created_at` is stamped with the wall
    /// clock unless overridden via [`with_created_at`](Self::with_created_at).
    pub fn new(
        response_id: impl Into<String>,
        prompt_id: impl Into<String>,
        raw_response: Value,
    ) -> Result<Self, DomainError> {
        let response = Self {
            response_id: response_id.into(),
            prompt_id: prompt_id.into(),
            raw_response,
            created_at: chrono::Utc::now().timestamp(),
        };
        response.validate()?;
        Ok(response)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.response_id.is_empty() {
            return Err(DomainError::validation("response_id must not be empty"));
        }
        if self.prompt_id.is_empty() {
            return Err(DomainError::validation("prompt_id must not be empty"));
        }
        if !self.raw_response.is_object() {
            return Err(DomainError::validation(
                "raw_response must be a JSON object",
            ));
        }
        Ok(())
    }

    /// Build a validated response from its storage-shaped record
    pub fn from_record(record: PromptResponseRecord) -> Result<Self, DomainError> {
        let response = Self {
            response_id: record.response_id,
            prompt_id: record.prompt_id,
            raw_response: record.raw_response,
            created_at: record.created_at,
        };
        response.validate()?;
        Ok(response)
    }

    /// Convert to the storage-shaped record. Total and lossless.
    pub fn to_record(&self) -> PromptResponseRecord {
        PromptResponseRecord {
            response_id: self.response_id.clone(),
            prompt_id: self.prompt_id.clone(),
            raw_response: self.raw_response.clone(),
            created_at: self.created_at,
        }
    }

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn response_id(&self) -> &str {
        &self.response_id
    }

    pub fn prompt_id(&self) -> &str {
        &self.prompt_id
    }

    pub fn raw_response(&self) -> &Value {
        &self.raw_response
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }
}
