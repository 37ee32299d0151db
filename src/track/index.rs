//! Per-identifier appearance index over a frame sequence.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use log::warn;

use crate::track::Fill;
use crate::vehicle::{Car, CarId, Frame};

/// Appearance index built in one pass over a frame sequence.
///
/// Maps every identifier to the sorted positions of its genuine appearances
/// and every (identifier, position) pair to the detected snapshot. Identifiers
/// iterate in ascending order.
#[derive(Debug, Clone)]
pub struct TrackIndex<'a> {
    appearances: BTreeMap<CarId, Vec<usize>>,
    snapshots: HashMap<(CarId, usize), &'a Car>,
    num_frames: usize,
}

impl<'a> TrackIndex<'a> {
    /// Index `frames`. When a frame holds the same identifier twice, the first
    /// occurrence is kept.
    pub fn build(frames: &'a [Frame]) -> Self {
        let mut appearances: BTreeMap<CarId, Vec<usize>> = BTreeMap::new();
        let mut snapshots = HashMap::new();

        for (pos, frame) in frames.iter().enumerate() {
            for car in &frame.cars {
                match snapshots.entry((car.id, pos)) {
                    Entry::Vacant(entry) => {
                        entry.insert(car);
                        appearances.entry(car.id).or_default().push(pos);
                    }
                    Entry::Occupied(_) => {
                        warn!(
                            "Duplicate vehicle id {} in frame {} (position {}); keeping the first",
                            car.id, frame.index, pos
                        );
                    }
                }
            }
        }

        Self {
            appearances,
            snapshots,
            num_frames: frames.len(),
        }
    }

    /// Every identifier seen in the sequence, ascending.
    pub fn ids(&self) -> impl Iterator<Item = CarId> + '_ {
        self.appearances.keys().copied()
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.appearances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appearances.is_empty()
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// Sorted positions of the genuine appearances of `id`.
    pub fn appearances(&self, id: CarId) -> &[usize] {
        self.appearances.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The genuine snapshot of `id` at `pos`, if it was detected there.
    pub fn snapshot(&self, id: CarId, pos: usize) -> Option<&'a Car> {
        self.snapshots.get(&(id, pos)).copied()
    }

    /// Closest genuine appearances strictly before and strictly after `pos`.
    pub fn neighbours(&self, id: CarId, pos: usize) -> (Option<usize>, Option<usize>) {
        let positions = self.appearances(id);
        let before = positions.partition_point(|&p| p < pos);
        let after = positions.partition_point(|&p| p <= pos);
        let prev = before.checked_sub(1).map(|i| positions[i]);
        let next = positions.get(after).copied();
        (prev, next)
    }

    /// How `id` is filled at `pos`.
    pub fn fill(&self, id: CarId, pos: usize) -> Fill {
        if self.snapshots.contains_key(&(id, pos)) {
            return Fill::Genuine;
        }
        let (prev, next) = self.neighbours(id, pos);
        Fill::for_gap(pos, prev, next)
    }
}
