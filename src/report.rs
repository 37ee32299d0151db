//! Turning danger classifications into flagged frame ranges and readable
//! time intervals.

mod clock;
mod config;
mod timeline;

pub use clock::{FrameClock, format_time};
pub use config::ReportConfig;
pub use timeline::{DangerTimeline, FrameInterval};
