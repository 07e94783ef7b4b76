//! Request/response DTOs for the schema API
//!
//! External aliases (`prompt_type`, `prompt_text`) are accepted on input;
//! responses always carry the storage field names via the record shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::schema::PromptSchemaRecord;
use crate::infrastructure::services::{
    CreateSchemaRequest, RecordResponseRequest, UpdateSchemaRequest,
};

/// Body of `POST /v1/schemas`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSchemaApiRequest {
    pub prompt_id: String,
    #[serde(default, alias = "prompt_type")]
    pub prompt_title: Option<String>,
    #[serde(default, alias = "prompt_text")]
    pub main_prompt: Option<String>,
    #[serde(default)]
    pub response_schema: Option<Value>,
    #[serde(default)]
    pub prompt_description: Option<String>,
    #[serde(default)]
    pub prompt_categories: Option<Vec<String>>,
    #[serde(default)]
    pub model_instruction: Option<String>,
    #[serde(default)]
    pub additional_messages: Option<Vec<Map<String, Value>>>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub ranking: Option<f64>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub provider_configs: Option<Map<String, Value>>,
}

impl From<CreateSchemaApiRequest> for CreateSchemaRequest {
    fn from(request: CreateSchemaApiRequest) -> Self {
        Self {
            prompt_id: request.prompt_id,
            prompt_title: request.prompt_title,
            prompt_text: request.main_prompt,
            response_schema: request.response_schema,
            description: request.prompt_description,
            categories: request.prompt_categories,
            model_instruction: request.model_instruction,
            additional_messages: request.additional_messages,
            is_public: request.is_public,
            ranking: request.ranking,
            created_by: request.created_by,
            provider_configs: request.provider_configs,
        }
    }
}

/// Body of `PUT /v1/schemas/{id}`; unset fields retain stored values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSchemaApiRequest {
    #[serde(default, alias = "prompt_type")]
    pub prompt_title: Option<String>,
    #[serde(default, alias = "prompt_text")]
    pub main_prompt: Option<String>,
    #[serde(default)]
    pub response_schema: Option<Value>,
    #[serde(default)]
    pub prompt_description: Option<String>,
    #[serde(default)]
    pub prompt_categories: Option<Vec<String>>,
    #[serde(default)]
    pub model_instruction: Option<String>,
    #[serde(default)]
    pub additional_messages: Option<Vec<Map<String, Value>>>,
    #[serde(default)]
    pub is_public: Option<bool>,
    #[serde(default)]
    pub ranking: Option<f64>,
    #[serde(default)]
    pub provider_configs: Option<Map<String, Value>>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

impl From<UpdateSchemaApiRequest> for UpdateSchemaRequest {
    fn from(request: UpdateSchemaApiRequest) -> Self {
        Self {
            prompt_title: request.prompt_title,
            prompt_text: request.main_prompt,
            response_schema: request.response_schema,
            description: request.prompt_description,
            categories: request.prompt_categories,
            model_instruction: request.model_instruction,
            additional_messages: request.additional_messages,
            is_public: request.is_public,
            ranking: request.ranking,
            provider_configs: request.provider_configs,
            updated_by: request.updated_by,
        }
    }
}

/// Body of `POST /v1/responses`
#[derive(Debug, Clone, Deserialize)]
pub struct RecordResponseApiRequest {
    #[serde(default)]
    pub response_id: Option<String>,
    pub prompt_id: String,
    #[serde(default)]
    pub raw_response: Option<Value>,
}

impl From<RecordResponseApiRequest> for RecordResponseRequest {
    fn from(request: RecordResponseApiRequest) -> Self {
        Self {
            response_id: request.response_id,
            prompt_id: request.prompt_id,
            raw_response: request.raw_response,
        }
    }
}

/// Response of `GET /v1/schemas`
#[derive(Debug, Clone, Serialize)]
pub struct ListSchemasResponse {
    pub schemas: Vec<PromptSchemaRecord>,
    pub total: usize,
}

/// Response of `DELETE /v1/schemas/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteSchemaResponse {
    pub deleted: bool,
}

/// Response of `GET /v1/schemas/{id}/text`
#[derive(Debug, Clone, Serialize)]
pub struct SchemaTextResponse {
    pub prompt_id: String,
    pub prompt_text: String,
}
