//! Infrastructure layer - storage engines, services, logging

pub mod logging;
pub mod schema;
pub mod services;
pub mod storage;
