//! Configuration file loading for dynamic-forms
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DYNAMIC_FORMS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./forms.toml` or `./.forms.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/dynamic-forms/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileJourneyConfig, FileOutputConfig, FileStorageBackend,
    FileStorageConfig,
};
pub use loader::ConfigLoader;
