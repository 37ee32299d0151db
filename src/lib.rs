//! Vehicle track reconstruction and danger-zone classification.
//!
//! Consumes per-frame vehicle detections from an external detector/tracker,
//! fills the frames where a tracked vehicle went missing, and classifies each
//! vehicle against a convex danger zone using the Separating Axis Theorem.

mod error;
pub mod geometry;
pub mod integration;
pub mod report;
pub mod track;
pub mod vehicle;

pub use error::{Error, Result};
pub use geometry::{Comparator, Exact, Point, Polygon, Projection, Tolerance};
pub use integration::{CarBuilder, CarSource, DangerPipeline, DangerReport, IntoCars};
pub use report::{DangerTimeline, FrameClock, FrameInterval, ReportConfig};
pub use track::{Fill, RestoreStats, TrackIndex, restore_missing, restore_missing_with_stats};
pub use vehicle::{Car, CarId, DangerLevel, Frame};
