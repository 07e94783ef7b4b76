//! Application services

mod schema_manager;

pub use schema_manager::{
    CreateSchemaRequest, RecordResponseRequest, SchemaManager, SchemaManagerDefaults,
    UpdateSchemaRequest, DEFAULT_PROMPT_TEXT, DEFAULT_PROMPT_TYPE,
};
