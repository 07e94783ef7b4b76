//! API wire types

mod error;
mod schemas;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};
pub use schemas::{
    CreateSchemaApiRequest, DeleteSchemaResponse, ListSchemasResponse, RecordResponseApiRequest,
    SchemaTextResponse, UpdateSchemaApiRequest,
};
