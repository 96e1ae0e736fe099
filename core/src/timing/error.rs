//! Error types for timing loading and calculation

use std::path::PathBuf;
use thiserror::Error;

/// Errors while obtaining a timing record from its source
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read timing file {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read timing description from stdin")]
    ReadStdin(#[source] std::io::Error),

    #[error("invalid timing JSON in {origin}")]
    ParseJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors the calculator can produce for a structurally valid timing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimingError {
    #[error("frame time is zero, cannot derive a refresh rate from dot clock {dot_clock}")]
    DivisionByZero { dot_clock: u64 },

    #[error("frame time overflows: {scan_line_time} pixels per line x {total_lines} lines")]
    Overflow {
        scan_line_time: u64,
        total_lines: u64,
    },
}

/// Errors while parsing a modeline or recovering margins from it
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelineError {
    #[error("expected 9 modeline values, found {found}")]
    FieldCount { found: usize },

    #[error("invalid modeline value '{value}'")]
    InvalidNumber { value: String },

    #[error("modeline coordinate {field} ({value}) is below the preceding coordinate ({previous})")]
    OutOfOrder {
        field: &'static str,
        value: u64,
        previous: u64,
    },

    #[error("recovered {field} ({value}) does not fit a timing field")]
    OutOfRange { field: &'static str, value: u64 },
}
