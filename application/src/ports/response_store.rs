//! Response store port
//!
//! Defines how journey responses are persisted between requests.

use async_trait::async_trait;
use forms_domain::JourneyResponse;
use thiserror::Error;

/// Errors raised by response store adapters
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid response reference '{0}': use letters, digits, '-' or '_'")]
    InvalidReference(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored response '{reference}' is corrupt: {message}")]
    Corrupt { reference: String, message: String },
}

/// Port for journey response persistence
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Load the response stored under `reference`, if any
    async fn load(&self, reference: &str) -> Result<Option<JourneyResponse>, StoreError>;

    /// Insert or replace the response under its own reference
    async fn save(&self, response: &JourneyResponse) -> Result<(), StoreError>;

    /// Remove the response; returns whether one existed
    async fn discard(&self, reference: &str) -> Result<bool, StoreError>;
}
