use super::{Modeline, Report, Timing, TimingError};

/// Derive scan-line time, frame time, integer refresh rate and modeline.
///
/// `fps` truncates toward zero. Use [`Report::refresh_rate_hz`] for the
/// fractional value.
pub fn compute_report(timing: &Timing) -> Result<Report, TimingError> {
    let scan_line_time = timing.scan_line_time();
    let total_lines = timing.total_lines();

    let frame_time = scan_line_time
        .checked_mul(total_lines)
        .ok_or(TimingError::Overflow {
            scan_line_time,
            total_lines,
        })?;

    if frame_time == 0 {
        return Err(TimingError::DivisionByZero {
            dot_clock: timing.dot_clock,
        });
    }

    let fps = timing.dot_clock / frame_time;

    tracing::debug!(scan_line_time, frame_time, fps, "computed timing report");

    Ok(Report {
        timing: *timing,
        scan_line_time,
        frame_time,
        fps,
        modeline: compute_modeline(timing),
    })
}

/// Convert margins and sync lengths to absolute modeline coordinates.
pub fn compute_modeline(timing: &Timing) -> Modeline {
    let hr = u64::from(timing.x_res);
    let sh1 = hr + u64::from(timing.right_margin);
    let sh2 = sh1 + u64::from(timing.h_sync_len);
    let hfl = sh2 + u64::from(timing.left_margin);

    let vr = u64::from(timing.y_res);
    let sv1 = vr + u64::from(timing.lower_margin);
    let sv2 = sv1 + u64::from(timing.v_sync_len);
    let vfl = sv2 + u64::from(timing.upper_margin);

    Modeline {
        dot_clock: timing.dot_clock,
        hr,
        sh1,
        sh2,
        hfl,
        vr,
        sv1,
        sv2,
        vfl,
    }
}
