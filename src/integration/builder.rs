//! Builder for creating Car objects from detector output formats.

use crate::geometry::{Point, Polygon};
use crate::vehicle::{Car, CarId};

/// Builder for creating a [`Car`] from boxes or point lists.
///
/// Shapes left unset stay empty.
#[derive(Debug, Clone, Default)]
pub struct CarBuilder {
    id: CarId,
    wheels: Polygon,
    bounding_box: Polygon,
}

impl CarBuilder {
    /// Create a new car builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tracker identifier.
    pub fn id(mut self, id: CarId) -> Self {
        self.id = id;
        self
    }

    /// Set the wheel polygon from convex points in winding order.
    pub fn wheels(mut self, points: Vec<Point>) -> Self {
        self.wheels = Polygon::new(points);
        self
    }

    /// Set the wheel polygon from a TLBR box (x1, y1, x2, y2).
    pub fn wheels_tlbr(mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.wheels = Polygon::from_tlbr(x1, y1, x2, y2);
        self
    }

    /// Set the bounding box from convex points in winding order.
    pub fn bounding_box(mut self, points: Vec<Point>) -> Self {
        self.bounding_box = Polygon::new(points);
        self
    }

    /// Set the bounding box in TLBR format (x1, y1, x2, y2).
    pub fn bounding_box_tlbr(mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        self.bounding_box = Polygon::from_tlbr(x1, y1, x2, y2);
        self
    }

    /// Set the bounding box in XYWH format (center_x, center_y, width, height).
    pub fn bounding_box_xywh(mut self, cx: f64, cy: f64, w: f64, h: f64) -> Self {
        self.bounding_box = Polygon::from_tlbr(cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0);
        self
    }

    /// Build the final `Car`.
    pub fn build(self) -> Car {
        Car::new(self.id, self.wheels, self.bounding_box)
    }
}
