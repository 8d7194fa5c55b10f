//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "dynamic-forms";
const PROJECT_FILES: [&str; 2] = ["forms.toml", ".forms.toml"];
const ENV_PREFIX: &str = "DYNAMIC_FORMS_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables `DYNAMIC_FORMS_*` (`__` separates nested keys)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./forms.toml` or `./.forms.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/dynamic-forms/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load a single file on top of the defaults, ignoring every other source
    pub fn load_file(path: &Path) -> Result<FileConfig, Box<figment::Error>> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(FileConfig::default()))
                .merge(Toml::file(path)),
        )
    }

    fn extract(figment: Figment) -> Result<FileConfig, Box<figment::Error>> {
        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/dynamic-forms/config.toml if set,
    /// otherwise falls back to ~/.config/dynamic-forms/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Env:     {}* (nested keys split on '__')", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./forms.toml or ./.forms.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file_config::FileStorageBackend;
    use forms_domain::OutputFormat;
    use std::io::Write;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.journey.path, PathBuf::from("journey.toml"));
        assert_eq!(config.storage.backend, FileStorageBackend::File);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("dynamic-forms"));
    }

    #[test]
    fn test_load_file_merges_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[output]
format = "json"

[storage]
backend = "memory"
"#
        )
        .unwrap();

        let config = ConfigLoader::load_file(file.path()).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.storage.backend, FileStorageBackend::Memory);
        // Untouched sections keep their defaults
        assert_eq!(config.journey.path, PathBuf::from("journey.toml"));
        assert!(config.output.color);
    }

    #[test]
    fn test_load_file_rejects_bad_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[storage]\nbackend = \"redis\"").unwrap();
        assert!(ConfigLoader::load_file(file.path()).is_err());
    }

    #[test]
    fn test_env_overrides_project_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "forms.toml",
                "[storage]\nbackend = \"file\"\ndirectory = \"responses\"",
            )?;
            jail.set_env("DYNAMIC_FORMS_STORAGE__BACKEND", "memory");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.storage.backend, FileStorageBackend::Memory);
            assert_eq!(config.storage.directory, Some(PathBuf::from("responses")));
            Ok(())
        });
    }
}
