//! Frame × vehicle danger matrix and flagged frame ranges.

use std::collections::{BTreeSet, HashMap};

use ndarray::{Array2, Axis};

use crate::geometry::Polygon;
use crate::vehicle::{CarId, DangerLevel, Frame};

/// Inclusive range of frame numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameInterval {
    pub start: usize,
    pub end: usize,
}

/// Danger level of every vehicle in every frame of a sequence.
///
/// Rows are frames in sequence order, columns are identifiers in ascending
/// order. A vehicle absent from a frame counts as [`DangerLevel::Safe`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DangerTimeline {
    frame_indices: Vec<usize>,
    ids: Vec<CarId>,
    levels: Array2<u8>,
}

impl DangerTimeline {
    /// Classify every vehicle of `frames` against `danger_zone`.
    pub fn build(frames: &[Frame], danger_zone: &Polygon) -> Self {
        let ids: Vec<CarId> = frames
            .iter()
            .flat_map(|frame| frame.ids())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let columns: HashMap<CarId, usize> =
            ids.iter().enumerate().map(|(col, &id)| (id, col)).collect();

        let mut levels = Array2::zeros((frames.len(), ids.len()));
        for (row, frame) in frames.iter().enumerate() {
            for car in &frame.cars {
                let col = columns[&car.id];
                let level = car.get_danger_level(danger_zone);
                if level > levels[[row, col]] {
                    levels[[row, col]] = level;
                }
            }
        }

        Self {
            frame_indices: frames.iter().map(|frame| frame.index).collect(),
            ids,
            levels,
        }
    }

    pub fn ids(&self) -> &[CarId] {
        &self.ids
    }

    pub fn num_frames(&self) -> usize {
        self.frame_indices.len()
    }

    /// Raw matrix of danger values, shape (frames, identifiers).
    pub fn levels(&self) -> &Array2<u8> {
        &self.levels
    }

    /// Level of `id` at sequence position `pos`.
    pub fn level(&self, pos: usize, id: CarId) -> Option<DangerLevel> {
        let col = self.ids.binary_search(&id).ok()?;
        self.levels
            .get([pos, col])
            .copied()
            .and_then(DangerLevel::from_value)
    }

    /// Highest level among all vehicles of each frame.
    pub fn frame_levels(&self) -> Vec<DangerLevel> {
        self.levels
            .axis_iter(Axis(0))
            .map(|row| {
                row.iter()
                    .copied()
                    .max()
                    .and_then(DangerLevel::from_value)
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Maximal runs of consecutive frames where any vehicle reaches
    /// `min_level`. Bounds are frame numbers ([`Frame::index`]).
    pub fn intervals(&self, min_level: DangerLevel) -> Vec<FrameInterval> {
        let flags = self
            .frame_levels()
            .into_iter()
            .map(|level| level >= min_level);
        self.runs(flags)
    }

    /// Maximal runs of consecutive frames where vehicle `id` reaches
    /// `min_level`.
    pub fn vehicle_intervals(&self, id: CarId, min_level: DangerLevel) -> Vec<FrameInterval> {
        let Ok(col) = self.ids.binary_search(&id) else {
            return Vec::new();
        };
        let threshold = min_level.value();
        let flags = self.levels.column(col).into_iter().map(|&v| v >= threshold);
        self.runs(flags)
    }

    fn runs(&self, flags: impl Iterator<Item = bool>) -> Vec<FrameInterval> {
        let mut intervals = Vec::new();
        let mut start = None;
        for (pos, flagged) in flags.enumerate() {
            match (flagged, start) {
                (true, None) => start = Some(pos),
                (false, Some(first)) => {
                    intervals.push(self.interval(first, pos - 1));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(first) = start {
            intervals.push(self.interval(first, self.num_frames() - 1));
        }
        intervals
    }

    fn interval(&self, first: usize, last: usize) -> FrameInterval {
        FrameInterval {
            start: self.frame_indices[first],
            end: self.frame_indices[last],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::vehicle::Car;

    fn zone() -> Polygon {
        Polygon::from_rectangle(Point::new(0.0, 0.0), 10.0, 10.0)
    }

    fn car(id: CarId, level: DangerLevel) -> Car {
        let (wheels_x, box_x) = match level {
            DangerLevel::Wheels => (5.0, 5.0),
            DangerLevel::BoundingBox => (12.0, 9.0),
            DangerLevel::Safe => (20.0, 20.0),
        };
        Car::new(
            id,
            Polygon::from_rectangle(Point::new(wheels_x, 0.0), 3.0, 1.0),
            Polygon::from_rectangle(Point::new(box_x, 0.0), 6.0, 3.0),
        )
    }

    fn timeline(levels: &[&[(CarId, DangerLevel)]]) -> DangerTimeline {
        let frames: Vec<Frame> = levels
            .iter()
            .enumerate()
            .map(|(i, cars)| Frame::new(i, cars.iter().map(|&(id, l)| car(id, l)).collect()))
            .collect();
        DangerTimeline::build(&frames, &zone())
    }

    #[test]
    fn test_matrix_layout() {
        let t = timeline(&[
            &[(4, DangerLevel::Wheels)],
            &[(1, DangerLevel::BoundingBox), (4, DangerLevel::Safe)],
        ]);
        assert_eq!(t.ids(), &[1, 4]);
        assert_eq!(t.levels().dim(), (2, 2));
        assert_eq!(t.level(0, 4), Some(DangerLevel::Wheels));
        assert_eq!(t.level(0, 1), Some(DangerLevel::Safe));
        assert_eq!(t.level(1, 1), Some(DangerLevel::BoundingBox));
        assert_eq!(t.level(2, 1), None);
        assert_eq!(t.level(0, 9), None);
    }

    #[test]
    fn test_frame_levels() {
        let t = timeline(&[
            &[(1, DangerLevel::Safe), (2, DangerLevel::BoundingBox)],
            &[],
            &[(1, DangerLevel::Wheels), (2, DangerLevel::BoundingBox)],
        ]);
        assert_eq!(
            t.frame_levels(),
            vec![DangerLevel::BoundingBox, DangerLevel::Safe, DangerLevel::Wheels]
        );
    }

    #[test]
    fn test_intervals() {
        let t = timeline(&[
            &[(1, DangerLevel::Wheels)],
            &[(1, DangerLevel::BoundingBox)],
            &[(1, DangerLevel::Safe)],
            &[(1, DangerLevel::Wheels)],
            &[(1, DangerLevel::Wheels)],
        ]);
        assert_eq!(
            t.intervals(DangerLevel::BoundingBox),
            vec![
                FrameInterval { start: 0, end: 1 },
                FrameInterval { start: 3, end: 4 },
            ]
        );
        assert_eq!(
            t.intervals(DangerLevel::Wheels),
            vec![
                FrameInterval { start: 0, end: 0 },
                FrameInterval { start: 3, end: 4 },
            ]
        );
        assert_eq!(
            t.vehicle_intervals(1, DangerLevel::Wheels),
            t.intervals(DangerLevel::Wheels)
        );
        assert!(t.vehicle_intervals(2, DangerLevel::Safe).is_empty());
    }

    #[test]
    fn test_intervals_use_frame_numbers() {
        let frames = vec![
            Frame::new(120, vec![car(1, DangerLevel::Safe)]),
            Frame::new(121, vec![car(1, DangerLevel::Wheels)]),
            Frame::new(122, vec![car(1, DangerLevel::Wheels)]),
        ];
        let t = DangerTimeline::build(&frames, &zone());
        assert_eq!(
            t.intervals(DangerLevel::Wheels),
            vec![FrameInterval { start: 121, end: 122 }]
        );
    }

    #[test]
    fn test_empty_sequence() {
        let t = DangerTimeline::build(&[], &zone());
        assert_eq!(t.num_frames(), 0);
        assert!(t.intervals(DangerLevel::Safe).is_empty());
    }
}
