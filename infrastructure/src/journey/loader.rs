//! Journey definition loader

use super::definition::{JourneyDefinition, JourneyDefinitionError};
use forms_domain::Journey;
use std::path::Path;
use tracing::{debug, info};

/// Reads journey definitions from disk
pub struct JourneyLoader;

impl JourneyLoader {
    /// Load and validate the journey defined in `path`
    pub fn load_file(path: &Path) -> Result<Journey, JourneyDefinitionError> {
        debug!("Reading journey definition from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|source| JourneyDefinitionError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let journey = Self::load_str(&content)?;
        info!(
            "Loaded journey '{}' ({} sections, {} questions) from {}",
            journey.id(),
            journey.sections().len(),
            journey.questions().count(),
            path.display()
        );
        Ok(journey)
    }

    /// Load and validate a journey from TOML text
    pub fn load_str(content: &str) -> Result<Journey, JourneyDefinitionError> {
        JourneyDefinition::from_toml(content)?.into_journey()
    }
}
