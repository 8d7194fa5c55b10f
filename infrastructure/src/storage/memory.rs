//! In-memory response store

use async_trait::async_trait;
use forms_application::ports::response_store::{ResponseStore, StoreError};
use forms_domain::JourneyResponse;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Keeps responses in process memory, keyed by reference
#[derive(Default)]
pub struct InMemoryResponseStore {
    responses: RwLock<HashMap<String, JourneyResponse>>,
}

impl InMemoryResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.responses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.responses.read().await.is_empty()
    }
}

#[async_trait]
impl ResponseStore for InMemoryResponseStore {
    async fn load(&self, reference: &str) -> Result<Option<JourneyResponse>, StoreError> {
        Ok(self.responses.read().await.get(reference).cloned())
    }

    async fn save(&self, response: &JourneyResponse) -> Result<(), StoreError> {
        self.responses
            .write()
            .await
            .insert(response.reference().to_string(), response.clone());
        Ok(())
    }

    async fn discard(&self, reference: &str) -> Result<bool, StoreError> {
        Ok(self.responses.write().await.remove(reference).is_some())
    }
}
