//! Generic storage abstraction consumed by the schema store

mod entity;
mod repository;

pub use entity::{StorageEntity, StorageKey};
pub use repository::Storage;
