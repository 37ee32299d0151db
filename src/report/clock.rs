//! Frame number to wall-clock conversion.

use crate::error::{Error, Result};
use crate::report::FrameInterval;

/// Converts frame numbers to seconds at a fixed frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    frame_rate: f64,
}

impl FrameClock {
    pub fn new(frame_rate: f64) -> Result<Self> {
        if !frame_rate.is_finite() || frame_rate <= 0.0 {
            return Err(Error::InvalidFrameRate(frame_rate));
        }
        Ok(Self { frame_rate })
    }

    #[inline]
    pub fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    /// Timestamp of `frame` in seconds, rounded to milliseconds.
    pub fn seconds(&self, frame: usize) -> f64 {
        (frame as f64 / self.frame_rate * 1000.0).round() / 1000.0
    }

    /// `"from: <start>, to: <end>; "` for each interval, concatenated.
    pub fn describe(&self, intervals: &[FrameInterval]) -> String {
        intervals
            .iter()
            .map(|interval| {
                format!(
                    "from: {}, to: {}; ",
                    format_time(self.seconds(interval.start)),
                    format_time(self.seconds(interval.end))
                )
            })
            .collect()
    }
}

/// Format seconds as `MM:SS.sss`, or `HH:MM:SS.sss` from one hour on.
pub fn format_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = seconds % 60.0;

    if hours > 0 {
        format!("{:02}:{:02}:{:06.3}", hours, minutes, secs)
    } else {
        format!("{:02}:{:06.3}", minutes, secs)
    }
}
