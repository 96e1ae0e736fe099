pub mod config;
pub mod timing;

// Re-exports for convenience
pub use config::{CliConfig, ConfigError, OutputFormat};
pub use timing::{
    LoadError, Modeline, ModelineError, Report, Timing, TimingError, compute_modeline,
    compute_report, load_timing, parse_timing,
};
