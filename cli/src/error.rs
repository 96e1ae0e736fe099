//! Errors surfaced by the command-line front end

use modeline_core::{ConfigError, LoadError, ModelineError, TimingError};
use std::error::Error as _;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Timing(#[from] TimingError),

    #[error(transparent)]
    Modeline(#[from] ModelineError),

    #[error("failed to encode report as JSON")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Render the error followed by each of its causes, separated by `: `.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}
