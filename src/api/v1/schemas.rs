//! Prompt schema endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CreateSchemaApiRequest, DeleteSchemaResponse, ListSchemasResponse,
    RecordResponseApiRequest, SchemaTextResponse, UpdateSchemaApiRequest,
};
use crate::domain::schema::{PromptResponseRecord, PromptSchemaRecord};

/// GET /v1/schemas
pub async fn list_schemas(
    State(state): State<AppState>,
) -> Result<Json<ListSchemasResponse>, ApiError> {
    let schemas: Vec<PromptSchemaRecord> = state
        .schema_manager
        .list()
        .await
        .map_err(ApiError::from)?
        .iter()
        .map(|schema| schema.to_record())
        .collect();
    let total = schemas.len();

    Ok(Json(ListSchemasResponse { schemas, total }))
}

/// GET /v1/schemas/{id}
pub async fn get_schema(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
) -> Result<Json<PromptSchemaRecord>, ApiError> {
    debug!(prompt_id = %prompt_id, "Getting prompt schema");

    let schema = state
        .schema_manager
        .get(&prompt_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(schema.to_record()))
}

/// GET /v1/schemas/{id}/text
pub async fn get_schema_text(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
) -> Result<Json<SchemaTextResponse>, ApiError> {
    let prompt_text = state
        .schema_manager
        .get_prompt_text(&prompt_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(SchemaTextResponse {
        prompt_id,
        prompt_text,
    }))
}

/// POST /v1/schemas
pub async fn create_schema(
    State(state): State<AppState>,
    Json(request): Json<CreateSchemaApiRequest>,
) -> Result<(StatusCode, Json<PromptSchemaRecord>), ApiError> {
    debug!(prompt_id = %request.prompt_id, "Creating prompt schema");

    let schema = state
        .schema_manager
        .create(request.into())
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(schema.to_record())))
}

/// PUT /v1/schemas/{id}
pub async fn update_schema(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
    Json(request): Json<UpdateSchemaApiRequest>,
) -> Result<Json<PromptSchemaRecord>, ApiError> {
    debug!(prompt_id = %prompt_id, "Updating prompt schema");

    let schema = state
        .schema_manager
        .update(&prompt_id, request.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(schema.to_record()))
}

/// DELETE /v1/schemas/{id}
pub async fn delete_schema(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
) -> Result<Json<DeleteSchemaResponse>, ApiError> {
    debug!(prompt_id = %prompt_id, "Deleting prompt schema");

    let deleted = state
        .schema_manager
        .delete(&prompt_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(DeleteSchemaResponse { deleted }))
}

/// POST /v1/responses
pub async fn record_response(
    State(state): State<AppState>,
    Json(request): Json<RecordResponseApiRequest>,
) -> Result<(StatusCode, Json<PromptResponseRecord>), ApiError> {
    debug!(prompt_id = %request.prompt_id, "Recording prompt response");

    let response = state
        .schema_manager
        .record_response(request.into())
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(response.to_record())))
}

/// GET /v1/responses/{id}
pub async fn get_response(
    State(state): State<AppState>,
    Path(response_id): Path<String>,
) -> Result<Json<PromptResponseRecord>, ApiError> {
    let response = state
        .schema_manager
        .get_response(&response_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(response.to_record()))
}
