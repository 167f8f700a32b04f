//! User configuration for numex
//!
//! Settings live in a single TOML file, `~/.numex/config.toml` by default. The
//! location can be overridden with `--config` or the `NUMEX_CONFIG` environment
//! variable. Every key is optional:
//!
//! ```toml
//! # "fail" aborts on the first malformed token, "skip" drops it and continues
//! on_malformed = "fail"
//!
//! # Default output format for `numex extract`: "text" or "json"
//! format = "text"
//! ```
//!
//! Command-line flags take precedence over the file, and the file over the
//! built-in defaults.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::core::NumexError;
use crate::extract::MalformedPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Output format for extracted values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One number per line.
    #[default]
    Text,
    /// A JSON object with `values` and `skipped` arrays.
    Json,
}

/// Contents of the numex configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Policy applied to malformed numeric tokens
    pub on_malformed: MalformedPolicy,
    /// Default output format
    pub format: OutputFormat,
}

impl Config {
    /// Location of the configuration file when no override is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?;
        Ok(home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration, treating an explicit path and the default path differently.
    ///
    /// - `Some(path)`: the file must exist, otherwise [`NumexError::ConfigNotFound`].
    /// - `None`: the default path is used and a missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit file is missing or any file fails to parse.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => {
                if !Self::exists(&path).await? {
                    return Err(NumexError::ConfigNotFound {
                        path: path.display().to_string(),
                    }
                    .into());
                }
                Self::load_from(&path).await
            }
            None => {
                let path = Self::default_path()?;
                if Self::exists(&path).await? {
                    Self::load_from(&path).await
                } else {
                    debug!("No config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    async fn exists(path: &Path) -> Result<bool> {
        fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check for config file at {}", path.display()))
    }

    /// Parse the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self =
            toml::from_str(&content).map_err(|e| NumexError::ConfigParseError {
                file: path.display().to_string(),
                reason: e.message().to_string(),
            })?;

        debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Write the configuration to `path` as pretty TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be written.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = self.to_toml()?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Render the configuration as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, NumexError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.on_malformed, MalformedPolicy::Fail);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[tokio::test]
    async fn test_config_save_load() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested").join("config.toml");

        let config = Config {
            on_malformed: MalformedPolicy::Skip,
            format: OutputFormat::Json,
        };
        config.save_to(&config_path).await.unwrap();

        let loaded = Config::load_from(&config_path).await.unwrap();
        assert_eq!(loaded, config);
    }

    #[tokio::test]
    async fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(&config_path, "format = \"json\"\n").unwrap();

        let loaded = Config::load_from(&config_path).await.unwrap();
        assert_eq!(loaded.format, OutputFormat::Json);
        assert_eq!(loaded.on_malformed, MalformedPolicy::Fail);
    }

    #[tokio::test]
    async fn test_invalid_value_fails() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.toml");
        std::fs::write(&config_path, "on_malformed = \"ignore\"\n").unwrap();

        let err = Config::load_from(&config_path).await.unwrap_err();
        match err.downcast_ref::<NumexError>() {
            Some(NumexError::ConfigParseError {
                file,
                reason,
            }) => {
                assert_eq!(file, &config_path.display().to_string());
                assert!(reason.contains("ignore"), "reason: {reason}");
            }
            other => panic!("Expected ConfigParseError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_explicit_missing_path_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");

        let err = Config::load_with_optional(Some(missing)).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<NumexError>(),
            Some(NumexError::ConfigNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreadable_location_is_not_reported_missing() {
        let temp = TempDir::new().unwrap();
        let not_a_dir = temp.path().join("plain");
        std::fs::write(&not_a_dir, "").unwrap();

        let err = Config::load_with_optional(Some(not_a_dir.join("config.toml"))).await.unwrap_err();
        assert!(!matches!(
            err.downcast_ref::<NumexError>(),
            Some(NumexError::ConfigNotFound { .. })
        ));
        assert!(err.to_string().contains("Failed to check for config file"));
    }

    #[test]
    fn test_to_toml() {
        let rendered = Config::default().to_toml().unwrap();
        assert!(rendered.contains("on_malformed = \"fail\""));
        assert!(rendered.contains("format = \"text\""));
    }

    #[test]
    fn test_default_path_layout() {
        if let Ok(path) = Config::default_path() {
            assert!(path.ends_with(".numex/config.toml"));
        }
    }
}
