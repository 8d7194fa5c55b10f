//! JSON file response store
//!
//! One pretty-printed JSON file per response, named `<reference>.json`.

use async_trait::async_trait;
use forms_application::ports::response_store::{ResponseStore, StoreError};
use forms_domain::JourneyResponse;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Persists responses as JSON files under a directory
pub struct JsonFileResponseStore {
    directory: PathBuf,
}

impl JsonFileResponseStore {
    /// The directory is created on first save
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File path for `reference`
    ///
    /// References become file names, so only `[A-Za-z0-9_-]` is accepted.
    fn path_for(&self, reference: &str) -> Result<PathBuf, StoreError> {
        let valid = !reference.is_empty()
            && reference
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidReference(reference.to_string()));
        }
        Ok(self.directory.join(format!("{}.json", reference)))
    }
}

#[async_trait]
impl ResponseStore for JsonFileResponseStore {
    async fn load(&self, reference: &str) -> Result<Option<JourneyResponse>, StoreError> {
        let path = self.path_for(reference)?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let response = serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            reference: reference.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(response))
    }

    async fn save(&self, response: &JourneyResponse) -> Result<(), StoreError> {
        let path = self.path_for(response.reference())?;
        let json = serde_json::to_string_pretty(response).map_err(|e| StoreError::Corrupt {
            reference: response.reference().to_string(),
            message: e.to_string(),
        })?;

        tokio::fs::create_dir_all(&self.directory).await?;
        tokio::fs::write(&path, json).await?;
        debug!("Saved response to {}", path.display());
        Ok(())
    }

    async fn discard(&self, reference: &str) -> Result<bool, StoreError> {
        let path = self.path_for(reference)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
