//! A single video frame's worth of tracked vehicles.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::vehicle::{Car, CarId};

/// Vehicles observed in one frame.
///
/// `index` is a label carried through unchanged (typically the source video's
/// frame number); reconstruction works on the frame's position in the
/// sequence.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub index: usize,
    pub cars: Vec<Car>,
}

impl Frame {
    /// Create a frame without validating identifier uniqueness.
    pub fn new(index: usize, cars: Vec<Car>) -> Self {
        Self { index, cars }
    }

    /// Create a frame, rejecting duplicate identifiers.
    pub fn try_new(index: usize, cars: Vec<Car>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(cars.len());
        for car in &cars {
            if !seen.insert(car.id) {
                return Err(Error::DuplicateId {
                    id: car.id,
                    frame: index,
                });
            }
        }
        Ok(Self { index, cars })
    }

    /// First vehicle with the given identifier.
    pub fn get(&self, id: CarId) -> Option<&Car> {
        self.cars.iter().find(|car| car.id == id)
    }

    pub fn contains(&self, id: CarId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = CarId> + '_ {
        self.cars.iter().map(|car| car.id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_rejects_duplicates() {
        let err = Frame::try_new(4, vec![Car::placeholder(1), Car::placeholder(1)]).unwrap_err();
        assert_eq!(err, Error::DuplicateId { id: 1, frame: 4 });
    }

    #[test]
    fn test_lookup() {
        let frame = Frame::try_new(0, vec![Car::placeholder(3), Car::placeholder(9)]).unwrap();
        assert!(frame.contains(9));
        assert!(!frame.contains(4));
        assert_eq!(frame.ids().collect::<Vec<_>>(), vec![3, 9]);
        assert_eq!(frame.get(3).map(|c| c.id), Some(3));
    }
}
