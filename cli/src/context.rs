use modeline_core::config::{CliConfig, ConfigError, OutputFormat};
use std::path::Path;

/// Holds the preferences a single invocation runs with.
#[derive(Debug, Clone, Default)]
pub struct CliContext {
    pub config: CliConfig,
}

impl CliContext {
    /// Load preferences from `config_path` when given, otherwise from the
    /// per-user location.
    pub fn new(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_path {
            Some(path) => CliConfig::load_from(path)?,
            None => CliConfig::load(),
        };
        Ok(Self { config })
    }

    /// Apply command-line flags on top of the stored preferences.
    /// Flags can only switch options on.
    pub fn with_flags(mut self, json: bool, precise: bool) -> Self {
        if json {
            self.config.format = OutputFormat::Json;
        }
        self.config.precise |= precise;
        self
    }
}
