//! Densify a frame sequence so every tracked vehicle appears in every frame.

use log::{debug, warn};

use crate::track::{Fill, TrackIndex};
use crate::vehicle::{Car, Frame};

/// Counts of how the vehicles of a restored sequence were produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreStats {
    pub genuine: usize,
    pub held_forward: usize,
    pub held_backward: usize,
    pub placeholders: usize,
}

impl RestoreStats {
    fn record(&mut self, fill: Fill) {
        match fill {
            Fill::Genuine => self.genuine += 1,
            Fill::HeldForward { .. } => self.held_forward += 1,
            Fill::HeldBackward { .. } => self.held_backward += 1,
            Fill::Placeholder => self.placeholders += 1,
        }
    }

    /// Vehicles that were not detected in their frame.
    pub fn synthesized(&self) -> usize {
        self.held_forward + self.held_backward + self.placeholders
    }
}

/// Fill every frame where a known vehicle was not detected.
///
/// See [`restore_missing_with_stats`].
pub fn restore_missing(frames: &[Frame]) -> Vec<Frame> {
    restore_missing_with_stats(frames).0
}

/// Fill every frame where a known vehicle was not detected, and report how
/// each output vehicle was obtained.
///
/// The output has the same length and order as `frames`, and each output
/// frame lists every identifier of the sequence exactly once, ascending.
/// Genuine detections are copied unchanged. A missing vehicle reuses the
/// shapes of its nearest genuine appearance according to [`Fill::for_gap`].
pub fn restore_missing_with_stats(frames: &[Frame]) -> (Vec<Frame>, RestoreStats) {
    let index = TrackIndex::build(frames);
    let mut stats = RestoreStats::default();
    let mut restored = Vec::with_capacity(frames.len());

    for (pos, frame) in frames.iter().enumerate() {
        let mut cars = Vec::with_capacity(index.len());
        for id in index.ids() {
            let fill = index.fill(id, pos);
            stats.record(fill);

            let car = match fill.source(pos).and_then(|src| index.snapshot(id, src)) {
                Some(snapshot) => snapshot.clone(),
                None => {
                    warn!(
                        "Vehicle {} has no genuine appearance; emitting an empty placeholder in frame {}",
                        id, frame.index
                    );
                    Car::placeholder(id)
                }
            };
            cars.push(car);
        }
        restored.push(Frame::new(frame.index, cars));
    }

    debug!(
        "Restored {} frames with {} vehicles: {} genuine, {} synthesized",
        frames.len(),
        index.len(),
        stats.genuine,
        stats.synthesized()
    );

    (restored, stats)
}
