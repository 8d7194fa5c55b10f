//! Infrastructure layer for dynamic-forms
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading
//! and journey definition files.

pub mod config;
pub mod journey;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileJourneyConfig, FileOutputConfig,
    FileStorageBackend, FileStorageConfig,
};
pub use journey::{JourneyDefinition, JourneyDefinitionError, JourneyLoader};
pub use storage::{InMemoryResponseStore, JsonFileResponseStore};
