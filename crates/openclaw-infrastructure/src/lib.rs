//! Infrastructure layer: durable storage backends, path management and
//! configuration loading.

pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::OpenClawPaths;
pub use crate::storage::{FileKeyValueStorage, InMemoryKeyValueStorage};
