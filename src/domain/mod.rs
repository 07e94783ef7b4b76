//! Domain layer - core entities, records, and contracts

pub mod clock;
pub mod error;
pub mod schema;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DomainError;
pub use schema::{
    PromptResponse, PromptResponseRecord, PromptSchema, PromptSchemaRecord, SchemaStore,
};
pub use storage::{Storage, StorageEntity, StorageKey};
