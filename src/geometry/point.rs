//! Two-dimensional point and vector arithmetic.

use std::ops::{Add, Sub};

use nalgebra::Vector2;

use super::compare::{Comparator, Exact};

/// A point (or free vector) in the image plane.
///
/// Equality is exact coordinate equality; see [`Point::approx_eq`] for a
/// comparator-driven variant.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product with `other`.
    #[inline]
    pub fn dot(&self, other: &Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The vector rotated by 90 degrees: `(-y, x)`.
    #[inline]
    pub fn perp(&self) -> Point {
        Point::new(-self.y, self.x)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Unit vector in the same direction, or the vector itself when its
    /// length is zero.
    pub fn normalized_or_self(&self) -> Point {
        self.to_vector()
            .try_normalize(0.0)
            .map(Point::from)
            .unwrap_or(*self)
    }

    pub fn approx_eq<C: Comparator>(&self, other: &Point, cmp: &C) -> bool {
        cmp.equal(self.x, other.x) && cmp.equal(self.y, other.y)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, &Exact)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}
