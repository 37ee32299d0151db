//! Vehicle snapshot and its danger classification.

use crate::geometry::Polygon;
use crate::vehicle::DangerLevel;

/// Identifier assigned by the upstream tracker, stable for one physical
/// vehicle across the whole frame sequence.
pub type CarId = u64;

/// One vehicle at one instant: its tracking id, wheel polygon and bounding
/// box polygon.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Car {
    /// Tracker identifier
    pub id: CarId,
    /// Convex hull of the detected wheels
    pub wheels: Polygon,
    /// Bounding box of the whole vehicle
    pub bounding_box: Polygon,
}

impl Car {
    pub fn new(id: CarId, wheels: Polygon, bounding_box: Polygon) -> Self {
        Self {
            id,
            wheels,
            bounding_box,
        }
    }

    /// Inert stand-in for a vehicle with no known shape.
    pub fn placeholder(id: CarId) -> Self {
        Self::new(id, Polygon::empty(), Polygon::empty())
    }

    pub fn is_placeholder(&self) -> bool {
        self.wheels.is_empty() && self.bounding_box.is_empty()
    }

    /// Classify against `danger_zone`. Wheel contact is checked first and
    /// wins over bounding-box contact. Empty shapes never touch the zone.
    pub fn danger_level(&self, danger_zone: &Polygon) -> DangerLevel {
        if touches(danger_zone, &self.wheels) {
            return DangerLevel::Wheels;
        }
        if touches(danger_zone, &self.bounding_box) {
            return DangerLevel::BoundingBox;
        }
        DangerLevel::Safe
    }

    /// Numeric form of [`Car::danger_level`]: 2, 1 or 0.
    pub fn get_danger_level(&self, danger_zone: &Polygon) -> u8 {
        self.danger_level(danger_zone).value()
    }
}

fn touches(zone: &Polygon, shape: &Polygon) -> bool {
    !shape.is_empty() && zone.intersects(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn zone() -> Polygon {
        Polygon::from_rectangle(Point::new(0.0, 0.0), 10.0, 10.0)
    }

    #[test]
    fn test_wheels_in_zone() {
        let car = Car::new(
            1,
            Polygon::from_rectangle(Point::new(8.0, 1.0), 4.0, 1.0),
            Polygon::from_rectangle(Point::new(8.0, 1.0), 4.0, 4.0),
        );
        assert_eq!(car.danger_level(&zone()), DangerLevel::Wheels);
        assert_eq!(car.get_danger_level(&zone()), 2);
    }

    #[test]
    fn test_wheels_win_even_without_bounding_box() {
        let car = Car::new(
            1,
            Polygon::from_rectangle(Point::new(1.0, 1.0), 1.0, 1.0),
            Polygon::from_rectangle(Point::new(50.0, 50.0), 1.0, 1.0),
        );
        assert_eq!(car.get_danger_level(&zone()), 2);
    }

    #[test]
    fn test_only_bounding_box_in_zone() {
        let car = Car::new(
            2,
            Polygon::from_rectangle(Point::new(12.0, 0.0), 4.0, 1.0),
            Polygon::from_rectangle(Point::new(9.0, 0.0), 7.0, 4.0),
        );
        assert_eq!(car.danger_level(&zone()), DangerLevel::BoundingBox);
        assert_eq!(car.get_danger_level(&zone()), 1);
    }

    #[test]
    fn test_outside_zone() {
        let car = Car::new(
            3,
            Polygon::from_rectangle(Point::new(20.0, 0.0), 4.0, 1.0),
            Polygon::from_rectangle(Point::new(20.0, 0.0), 4.0, 4.0),
        );
        assert_eq!(car.danger_level(&zone()), DangerLevel::Safe);
        assert_eq!(car.get_danger_level(&zone()), 0);
    }

    #[test]
    fn test_placeholder_is_safe() {
        let car = Car::placeholder(7);
        assert!(car.is_placeholder());
        assert_eq!(car.danger_level(&zone()), DangerLevel::Safe);
    }

    #[test]
    fn test_danger_level_order() {
        assert!(DangerLevel::Wheels > DangerLevel::BoundingBox);
        assert!(DangerLevel::BoundingBox > DangerLevel::Safe);
        assert_eq!(DangerLevel::from_value(1), Some(DangerLevel::BoundingBox));
        assert_eq!(DangerLevel::from_value(3), None);
    }
}
