//! Start Journey use case

use crate::ports::journey_provider::JourneyProvider;
use crate::ports::response_store::{ResponseStore, StoreError};
use forms_domain::JourneyResponse;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum StartJourneyError {
    #[error("A journey response already exists for '{0}'")]
    AlreadyStarted(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input for the StartJourney use case
#[derive(Debug, Clone)]
pub struct StartJourneyInput {
    pub reference: String,
    /// Discard an existing response under the same reference first
    pub restart: bool,
}

impl StartJourneyInput {
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            restart: false,
        }
    }

    pub fn with_restart(mut self, restart: bool) -> Self {
        self.restart = restart;
        self
    }
}

/// Use case that creates and stores an empty journey response
pub struct StartJourneyUseCase {
    journey: Arc<dyn JourneyProvider>,
    store: Arc<dyn ResponseStore>,
}

impl StartJourneyUseCase {
    pub fn new(journey: Arc<dyn JourneyProvider>, store: Arc<dyn ResponseStore>) -> Self {
        Self { journey, store }
    }

    pub async fn execute(
        &self,
        input: StartJourneyInput,
    ) -> Result<JourneyResponse, StartJourneyError> {
        if input.restart {
            if self.store.discard(&input.reference).await? {
                info!("Discarded previous response '{}'", input.reference);
            }
        } else if self.store.load(&input.reference).await?.is_some() {
            return Err(StartJourneyError::AlreadyStarted(input.reference));
        }

        let response = JourneyResponse::new(self.journey.journey().id(), &input.reference);
        self.store.save(&response).await?;
        info!(
            "Started journey '{}' as '{}'",
            self.journey.journey().id(),
            input.reference
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MockStore, journey};
    use forms_domain::FieldValue;

    #[tokio::test]
    async fn test_start_creates_empty_response() {
        let store = Arc::new(MockStore::default());
        let use_case = StartJourneyUseCase::new(Arc::new(journey()), store.clone());

        let response = use_case.execute(StartJourneyInput::new("ABC")).await.unwrap();

        assert_eq!(response.journey_id(), "planning");
        assert!(response.answers().is_empty());
        assert_eq!(store.get("ABC"), Some(response));
    }

    #[tokio::test]
    async fn test_start_twice_is_rejected_unless_restarting() {
        let mut existing = JourneyResponse::new("planning", "ABC");
        existing
            .set_answer("full_name", FieldValue::text("Ada"))
            .unwrap();
        let store = Arc::new(MockStore::with(existing));
        let use_case = StartJourneyUseCase::new(Arc::new(journey()), store.clone());

        let err = use_case.execute(StartJourneyInput::new("ABC")).await.unwrap_err();
        assert!(matches!(err, StartJourneyError::AlreadyStarted(ref r) if r == "ABC"));
        assert!(store.get("ABC").unwrap().has_answer("full_name"));

        let fresh = use_case
            .execute(StartJourneyInput::new("ABC").with_restart(true))
            .await
            .unwrap();
        assert!(fresh.answers().is_empty());
        assert!(store.get("ABC").unwrap().answers().is_empty());
    }
}
