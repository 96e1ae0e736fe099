use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::{ModelineError, Timing};

/// Absolute sync coordinates of a video mode, in Xorg `Modeline` order.
///
/// ```text
/// Modeline "name" DotClock HR SH1 SH2 HFL VR SV1 SV2 VFL
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Modeline {
    /// Pixel clock in Hz
    #[serde(rename = "DotClock")]
    pub dot_clock: u64,
    /// Horizontal resolution
    pub hr: u64,
    /// Horizontal sync start
    pub sh1: u64,
    /// Horizontal sync end
    pub sh2: u64,
    /// Horizontal frame length (htotal)
    pub hfl: u64,
    /// Vertical resolution
    pub vr: u64,
    /// Vertical sync start
    pub sv1: u64,
    /// Vertical sync end
    pub sv2: u64,
    /// Vertical frame length (vtotal)
    pub vfl: u64,
}

impl Modeline {
    /// Recover the margin/sync representation these coordinates were built from.
    pub fn to_timing(&self) -> Result<Timing, ModelineError> {
        Ok(Timing {
            dot_clock: self.dot_clock,
            x_res: narrow("HR", self.hr)?,
            right_margin: span("SH1", self.hr, self.sh1)?,
            h_sync_len: span("SH2", self.sh1, self.sh2)?,
            left_margin: span("HFL", self.sh2, self.hfl)?,
            y_res: narrow("VR", self.vr)?,
            lower_margin: span("SV1", self.vr, self.sv1)?,
            v_sync_len: span("SV2", self.sv1, self.sv2)?,
            upper_margin: span("VFL", self.sv2, self.vfl)?,
        })
    }
}

fn span(field: &'static str, previous: u64, value: u64) -> Result<u32, ModelineError> {
    let delta = value.checked_sub(previous).ok_or(ModelineError::OutOfOrder {
        field,
        value,
        previous,
    })?;
    narrow(field, delta)
}

fn narrow(field: &'static str, value: u64) -> Result<u32, ModelineError> {
    u32::try_from(value).map_err(|_| ModelineError::OutOfRange { field, value })
}

impl fmt::Display for Modeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            self.dot_clock,
            self.hr,
            self.sh1,
            self.sh2,
            self.hfl,
            self.vr,
            self.sv1,
            self.sv2,
            self.vfl
        )
    }
}

impl FromStr for Modeline {
    type Err = ModelineError;

    /// Accepts the bare nine values or a full directive such as
    /// `Modeline "1280x1024" 65000000 1280 1328 1440 1688 1024 1025 1028 1066 -hsync`.
    /// Trailing flags are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace().peekable();

        tokens.next_if(|t| t.eq_ignore_ascii_case("modeline"));

        // Mode names are quoted and may contain spaces
        if let Some(name) = tokens.next_if(|t| t.starts_with('"')) {
            let closed = name.len() > 1 && name.ends_with('"');
            if !closed {
                for token in tokens.by_ref() {
                    if token.ends_with('"') {
                        break;
                    }
                }
            }
        }

        let mut values = Vec::with_capacity(9);
        for token in tokens {
            if !token.starts_with(|c: char| c.is_ascii_digit()) {
                break;
            }
            let value = token
                .parse::<u64>()
                .map_err(|_| ModelineError::InvalidNumber {
                    value: token.to_string(),
                })?;
            values.push(value);
        }

        let [dot_clock, hr, sh1, sh2, hfl, vr, sv1, sv2, vfl] = values[..] else {
            return Err(ModelineError::FieldCount {
                found: values.len(),
            });
        };

        Ok(Modeline {
            dot_clock,
            hr,
            sh1,
            sh2,
            hfl,
            vr,
            sv1,
            sv2,
            vfl,
        })
    }
}
