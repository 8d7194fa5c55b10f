//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use forms_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("journey.path cannot be empty")]
    EmptyJourneyPath,

    #[error("storage.directory is required when storage.backend = \"file\"")]
    MissingStorageDirectory,
}

/// Raw journey configuration from TOML (`[journey]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJourneyConfig {
    /// Path to the journey definition file
    pub path: PathBuf,
}

impl Default for FileJourneyConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("journey.toml"),
        }
    }
}

/// Where journey responses are kept
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStorageBackend {
    /// Process memory; responses vanish on exit
    Memory,
    /// One JSON file per response
    #[default]
    File,
}

/// Raw storage configuration from TOML (`[storage]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    pub backend: FileStorageBackend,
    /// Directory for the file backend
    pub directory: Option<PathBuf>,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            backend: FileStorageBackend::File,
            directory: Some(PathBuf::from(".dynamic-forms/responses")),
        }
    }
}

/// Raw output configuration from TOML (`[output]` section)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub journey: FileJourneyConfig,
    pub storage: FileStorageConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.journey.path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyJourneyPath);
        }

        if self.storage.backend == FileStorageBackend::File
            && self
                .storage
                .directory
                .as_ref()
                .is_none_or(|d| d.as_os_str().is_empty())
        {
            return Err(ConfigValidationError::MissingStorageDirectory);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[journey]
path = "journeys/crown-development.toml"

[storage]
backend = "file"
directory = "/var/lib/forms"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.journey.path,
            PathBuf::from("journeys/crown-development.toml")
        );
        assert_eq!(config.storage.backend, FileStorageBackend::File);
        assert_eq!(
            config.storage.directory,
            Some(PathBuf::from("/var/lib/forms"))
        );
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[storage]
backend = "memory"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.backend, FileStorageBackend::Memory);
        // Defaults should apply
        assert_eq!(config.journey.path, PathBuf::from("journey.toml"));
        assert!(config.output.format.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_journey_path() {
        let toml_str = r#"
[journey]
path = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyJourneyPath)
        );
    }

    #[test]
    fn test_validate_file_backend_needs_directory() {
        let mut config = FileConfig::default();
        config.storage.directory = None;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingStorageDirectory)
        );

        config.storage.backend = FileStorageBackend::Memory;
        assert!(config.validate().is_ok());
    }
}
