//! Display timing description and the modeline/refresh-rate derivation.
//!
//! A [`Timing`] uses the framebuffer convention of visible resolution plus
//! margins and sync lengths. The calculator turns it into a [`Report`] with
//! the refresh rate and the absolute coordinates of an Xorg [`Modeline`].

mod calculator;
mod error;
mod loader;
mod modeline;
mod report;

pub use calculator::{compute_modeline, compute_report};
pub use error::{LoadError, ModelineError, TimingError};
pub use loader::{STDIN_PATH, load_timing, parse_timing};
pub use modeline::Modeline;
pub use report::Report;

use serde::{Deserialize, Serialize};

/// Framebuffer-style timing of a single video mode.
///
/// Keys are PascalCase in JSON (`DotClock`, `XRes`, `HSyncLen`, ...).
/// Missing keys default to zero and unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Timing {
    /// Pixel clock in Hz
    pub dot_clock: u64,
    pub x_res: u32,
    pub y_res: u32,
    /// Horizontal front porch
    pub right_margin: u32,
    /// Horizontal back porch
    pub left_margin: u32,
    pub h_sync_len: u32,
    /// Vertical front porch
    pub lower_margin: u32,
    /// Vertical back porch
    pub upper_margin: u32,
    pub v_sync_len: u32,
}

impl Timing {
    /// Total pixels per scan line, blanking included
    pub fn scan_line_time(&self) -> u64 {
        u64::from(self.x_res)
            + u64::from(self.left_margin)
            + u64::from(self.right_margin)
            + u64::from(self.h_sync_len)
    }

    /// Total lines per frame, blanking included
    pub fn total_lines(&self) -> u64 {
        u64::from(self.y_res)
            + u64::from(self.upper_margin)
            + u64::from(self.lower_margin)
            + u64::from(self.v_sync_len)
    }
}
