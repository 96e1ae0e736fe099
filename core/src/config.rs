//! Persisted output preferences
//!
//! Stored as TOML in the per-user config directory under the `modeline` app
//! name. Command-line flags take precedence over these values.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const APP_NAME: &str = "modeline";
pub const CONFIG_NAME: &str = "config";

/// Errors during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("configuration file {path} does not exist")]
    NotFound { path: PathBuf },
}

/// How a report is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Print fractional refresh rate and horizontal frequency
    #[serde(default)]
    pub precise: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

impl CliConfig {
    /// Load from the per-user location, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        confy::load(APP_NAME, CONFIG_NAME).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load configuration, using defaults");
            Self::default()
        })
    }

    /// Load from an explicit file. Unlike [`CliConfig::load`], errors are
    /// returned and a missing file is never created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Ok(confy::load_path(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("modeline-config-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_path("json.toml");
        std::fs::write(&path, "precise = true\nformat = \"json\"\n").unwrap();

        let config = CliConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(config.precise);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let path = temp_path("partial.toml");
        std::fs::write(&path, "precise = true\n").unwrap();

        let config = CliConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(config.precise);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_missing_file_is_not_created() {
        let dir = temp_path("missing-dir");
        let path = dir.join("typo.toml");

        let result = CliConfig::load_from(&path);

        match result {
            Err(ConfigError::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected NotFound error, got {other:?}"),
        }
        assert!(!path.exists());
        assert!(!dir.exists());
    }

    #[test]
    fn test_load_invalid_file() {
        let path = temp_path("invalid.toml");
        std::fs::write(&path, "format = \"yaml\"\n").unwrap();

        let result = CliConfig::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
