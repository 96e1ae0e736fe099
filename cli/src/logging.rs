//! Logging configuration.
//!
//! Logs go to stderr so stdout only carries the report. Set `DEBUG_LOGGING=1`
//! to enable debug output for the modeline crates; `RUST_LOG` overrides both.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "warn";
const DEBUG_FILTER: &str = "warn,modeline_core=debug,modeline_cli=debug";

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if debug_logging {
            DEBUG_FILTER
        } else {
            DEFAULT_FILTER
        })
    });

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();

    tracing::debug!(debug_logging, "logging initialized");
}
