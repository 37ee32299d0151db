//! DangerPipeline for combining an upstream tracker with reconstruction and
//! danger reporting.

use log::info;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::report::{DangerTimeline, FrameClock, FrameInterval, ReportConfig};
use crate::track::{RestoreStats, restore_missing_with_stats};
use crate::vehicle::Frame;

use super::{CarSource, IntoCars};

/// A pipeline that collects tracked frames from a `CarSource`, then restores
/// missing vehicles and flags the frames where any vehicle enters the zone.
pub struct DangerPipeline<S: CarSource> {
    source: S,
    danger_zone: Polygon,
    config: ReportConfig,
    clock: FrameClock,
    frames: Vec<Frame>,
}

/// Result of a finished [`DangerPipeline`].
#[derive(Debug, Clone)]
pub struct DangerReport {
    /// Restored frames, every vehicle present in every frame
    pub frames: Vec<Frame>,
    /// How the restored vehicles were obtained
    pub stats: RestoreStats,
    /// Danger level of every vehicle in every restored frame
    pub timeline: DangerTimeline,
    /// Frame ranges at or above the configured level
    pub intervals: Vec<FrameInterval>,
    clock: FrameClock,
}

impl DangerReport {
    /// Human-readable time ranges of the flagged intervals.
    pub fn summary(&self) -> String {
        self.clock.describe(&self.intervals)
    }
}

impl<S: CarSource> DangerPipeline<S> {
    /// Create a new pipeline for `danger_zone`. Fails on an invalid frame rate.
    pub fn new(source: S, danger_zone: Polygon, config: ReportConfig) -> Result<Self> {
        let clock = config.clock()?;
        Ok(Self {
            source,
            danger_zone,
            config,
            clock,
            frames: Vec::new(),
        })
    }

    /// Create a new pipeline with the default report configuration.
    pub fn with_default_config(source: S, danger_zone: Polygon) -> Result<Self> {
        Self::new(source, danger_zone, ReportConfig::default())
    }

    /// Run the source on one raw frame and record its vehicles.
    ///
    /// Returns the frame number assigned to the recorded frame.
    pub fn process_frame(&mut self, input: &[u8], width: u32, height: u32) -> Result<usize, S::Error> {
        let cars = self.source.track(input, width, height)?;
        Ok(self.push_frame(cars))
    }

    /// Record vehicles that were tracked elsewhere.
    pub fn push_frame(&mut self, cars: impl IntoCars) -> usize {
        let index = self.frames.len();
        self.frames.push(Frame::new(index, cars.into_cars()));
        index
    }

    /// Frames recorded so far, as produced by the source.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn danger_zone(&self) -> &Polygon {
        &self.danger_zone
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Get a reference to the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Restore missing vehicles and classify the whole sequence.
    pub fn finish(self) -> DangerReport {
        let (frames, stats) = restore_missing_with_stats(&self.frames);
        let timeline = DangerTimeline::build(&frames, &self.danger_zone);
        let intervals = timeline.intervals(self.config.min_level);

        info!(
            "Processed {} frames: {} vehicles, {} restored, {} flagged intervals",
            frames.len(),
            timeline.ids().len(),
            stats.synthesized(),
            intervals.len()
        );

        DangerReport {
            frames,
            stats,
            timeline,
            intervals,
            clock: self.clock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geometry::Point;
    use crate::integration::CarBuilder;
    use crate::vehicle::Car;

    struct MockSource {
        frames: Vec<Vec<Car>>,
        calls: usize,
    }

    impl CarSource for MockSource {
        type Error = String;

        fn track(&mut self, _input: &[u8], _width: u32, _height: u32) -> Result<Vec<Car>, Self::Error> {
            let cars = self
                .frames
                .get(self.calls)
                .cloned()
                .ok_or_else(|| "no more frames".to_string())?;
            self.calls += 1;
            Ok(cars)
        }
    }

    fn car(x: f64) -> Car {
        CarBuilder::new()
            .id(1)
            .wheels_tlbr(x, 0.0, x + 4.0, 1.0)
            .bounding_box_tlbr(x, 0.0, x + 4.0, 3.0)
            .build()
    }

    fn zone() -> Polygon {
        Polygon::from_rectangle(Point::new(10.0, 0.0), 5.0, 5.0)
    }

    #[test]
    fn test_danger_pipeline() {
        let source = MockSource {
            frames: vec![vec![car(0.0)], vec![], vec![], vec![car(12.0)], vec![car(30.0)]],
            calls: 0,
        };
        let mut pipeline = DangerPipeline::with_default_config(source, zone()).unwrap();
        for _ in 0..5 {
            pipeline.process_frame(&[], 640, 480).unwrap();
        }
        assert_eq!(pipeline.source().calls, 5);
        assert!(pipeline.process_frame(&[], 640, 480).is_err());

        let report = pipeline.finish();
        assert_eq!(report.frames.len(), 5);
        assert_eq!(report.stats.synthesized(), 2);
        // Frame 1 holds frame 0 over, frame 2 takes frame 3's shapes.
        assert_eq!(report.intervals, vec![FrameInterval { start: 2, end: 3 }]);
        assert_eq!(report.summary(), "from: 00:00.067, to: 00:00.100; ");
    }

    #[test]
    fn test_invalid_config() {
        let source = MockSource {
            frames: vec![],
            calls: 0,
        };
        let config = ReportConfig {
            frame_rate: 0.0,
            ..ReportConfig::default()
        };
        assert_eq!(
            DangerPipeline::new(source, zone(), config).err(),
            Some(Error::InvalidFrameRate(0.0))
        );
    }
}
