use serde::Serialize;
use std::fmt;

use super::{Modeline, Timing};

/// Result of a timing calculation. Only built by [`super::compute_report`],
/// so `frame_time` is always non-zero.
///
/// Serializes with PascalCase keys, matching the timing input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    pub(super) timing: Timing,
    pub(super) scan_line_time: u64,
    pub(super) frame_time: u64,
    pub(super) fps: u64,
    pub(super) modeline: Modeline,
}

impl Report {
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    pub fn scan_line_time(&self) -> u64 {
        self.scan_line_time
    }

    pub fn frame_time(&self) -> u64 {
        self.frame_time
    }

    /// Refresh rate in Hz, truncated toward zero
    pub fn fps(&self) -> u64 {
        self.fps
    }

    pub fn modeline(&self) -> &Modeline {
        &self.modeline
    }

    /// Refresh rate in Hz without truncation
    pub fn refresh_rate_hz(&self) -> f64 {
        self.timing.dot_clock as f64 / self.frame_time as f64
    }

    /// Horizontal scan frequency in kHz
    pub fn hsync_khz(&self) -> f64 {
        self.timing.dot_clock as f64 / self.scan_line_time as f64 / 1000.0
    }

    /// Text rendering followed by the fractional refresh and line rates.
    pub fn render_precise(&self) -> String {
        format!(
            "{self}\nrefresh: {:.3} Hz\nhsync: {:.3} kHz",
            self.refresh_rate_hz(),
            self.hsync_khz()
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.timing;
        writeln!(f, "Resolution: {}x{}", t.x_res, t.y_res)?;
        writeln!(f, "Timing: freq: {}", t.dot_clock)?;
        writeln!(f, "        Right Margin (hfrontporch): \t{}", t.right_margin)?;
        writeln!(f, "        Left Margin (hbackporch): \t{}", t.left_margin)?;
        writeln!(f, "        H Sync Len (hsyncwidth): \t{}", t.h_sync_len)?;
        writeln!(f, "        Lower Margin (vfrontporch): \t{}", t.lower_margin)?;
        writeln!(f, "        Upper Margin (vbackporch): \t{}", t.upper_margin)?;
        writeln!(f, "        V Sync Len (vsyncwidth): \t{}", t.v_sync_len)?;
        writeln!(f, "fps: {} Hz", self.fps)?;
        write!(f, "Xorg Modeline: {}", self.modeline)
    }
}
