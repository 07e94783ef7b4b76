//! Schema persistence infrastructure

mod storage_store;

pub use storage_store::StorageSchemaStore;
