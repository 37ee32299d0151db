use crate::error::Result;
use crate::report::FrameClock;
use crate::vehicle::DangerLevel;

/// Configuration for danger reporting.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Frames per second of the source video
    pub frame_rate: f64,
    /// Lowest level that flags a frame
    pub min_level: DangerLevel,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30.0,
            min_level: DangerLevel::BoundingBox,
        }
    }
}

impl ReportConfig {
    pub fn clock(&self) -> Result<FrameClock> {
        FrameClock::new(self.frame_rate)
    }
}
