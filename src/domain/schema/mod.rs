//! Prompt schema domain - validated models, storage records, store contract

mod entity;
mod record;
mod response;
mod store;

pub use entity::PromptSchema;
pub use record::{PromptResponseRecord, PromptSchemaRecord};
pub use response::PromptResponse;
pub use store::SchemaStore;

#[cfg(test)]
pub use store::mock::MockSchemaStore;
