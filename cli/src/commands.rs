use modeline_core::config::OutputFormat;
use modeline_core::{Modeline, Report, compute_report, load_timing};
use std::path::Path;

use crate::CliContext;
use crate::error::CliError;

/// Load the timing description at `path`, compute its report and render it
/// in the configured format.
pub fn calculate(path: &Path, ctx: &CliContext) -> Result<String, CliError> {
    let timing = load_timing(path)?;
    tracing::info!(
        path = %path.display(),
        x_res = timing.x_res,
        y_res = timing.y_res,
        "loaded timing"
    );

    let report = compute_report(&timing)?;
    render(&report, ctx)
}

/// Recover the timing behind a modeline and report on it.
pub fn from_modeline(line: &str, ctx: &CliContext) -> Result<String, CliError> {
    let modeline: Modeline = line.parse()?;
    let timing = modeline.to_timing()?;
    tracing::info!(%modeline, "recovered timing from modeline");

    let report = compute_report(&timing)?;
    render(&report, ctx)
}

pub fn render(report: &Report, ctx: &CliContext) -> Result<String, CliError> {
    let precise = ctx.config.precise;
    match ctx.config.format {
        OutputFormat::Text if precise => Ok(report.render_precise()),
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => {
            let mut value = serde_json::to_value(report)?;
            if precise && let Some(map) = value.as_object_mut() {
                map.insert("RefreshRateHz".into(), report.refresh_rate_hz().into());
                map.insert("HSyncKHz".into(), report.hsync_khz().into());
            }
            Ok(serde_json::to_string_pretty(&value)?)
        }
    }
}
