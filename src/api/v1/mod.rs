//! Versioned schema API

pub mod schemas;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/schemas",
            get(schemas::list_schemas).post(schemas::create_schema),
        )
        .route(
            "/schemas/{id}",
            get(schemas::get_schema)
                .put(schemas::update_schema)
                .delete(schemas::delete_schema),
        )
        .route("/schemas/{id}/text", get(schemas::get_schema_text))
        .route("/responses", post(schemas::record_response))
        .route("/responses/{id}", get(schemas::get_response))
}
