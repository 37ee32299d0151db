//! Convex polygons and the Separating Axis Theorem intersection test.

use super::compare::{Comparator, Exact};
use super::point::Point;

/// Closed interval produced by projecting a polygon onto an axis.
///
/// Projecting an empty polygon yields the inverted interval `(+inf, -inf)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// Whether the two intervals are disjoint under `cmp`.
    ///
    /// Intervals that merely touch are not separated.
    #[inline]
    pub fn is_separated_from<C: Comparator>(&self, other: &Projection, cmp: &C) -> bool {
        cmp.less(self.max, other.min) || cmp.less(other.max, self.min)
    }
}

/// A convex polygon with vertices in a consistent winding order.
///
/// The winding direction (clockwise or counter-clockwise) is up to the
/// caller; the intersection test does not depend on it. An empty polygon is
/// a "no shape" placeholder and must not be passed to [`Polygon::intersects`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The placeholder polygon with no vertices.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Axis-aligned rectangle, listed counter-clockwise from `bottom_left`.
    pub fn from_rectangle(bottom_left: Point, width: f64, height: f64) -> Self {
        let Point { x, y } = bottom_left;
        Self::new(vec![
            bottom_left,
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
    }

    /// Axis-aligned rectangle from two opposite corners (x1, y1, x2, y2).
    pub fn from_tlbr(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::from_rectangle(Point::new(x1.min(x2), y1.min(y2)), (x2 - x1).abs(), (y2 - y1).abs())
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edge vectors `p[i + 1] - p[i]`, wrapping from the last vertex to the first.
    pub fn edges(&self) -> Vec<Point> {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[(i + 1) % n] - self.points[i])
            .collect()
    }

    /// Edge normals used as projection axes.
    ///
    /// Normals of zero-length edges stay unnormalised (the zero vector). Such
    /// an axis projects everything to 0 and can never separate two shapes.
    pub fn axes(&self) -> Vec<Point> {
        self.edges()
            .iter()
            .map(|edge| edge.perp().normalized_or_self())
            .collect()
    }

    /// Project every vertex onto `axis` and return the covered interval.
    pub fn project(&self, axis: &Point) -> Projection {
        self.points.iter().fold(
            Projection {
                min: f64::INFINITY,
                max: f64::NEG_INFINITY,
            },
            |acc, point| {
                let proj = point.dot(axis);
                Projection {
                    min: acc.min.min(proj),
                    max: acc.max.max(proj),
                }
            },
        )
    }

    /// Whether two convex polygons overlap. Touching edges or vertices count
    /// as an intersection.
    pub fn intersects(&self, other: &Polygon) -> bool {
        self.intersects_with(other, &Exact)
    }

    /// Separating Axis Theorem test with a caller-chosen comparator.
    ///
    /// Tries every edge normal of both polygons; returns `false` as soon as
    /// one axis separates their projections.
    pub fn intersects_with<C: Comparator>(&self, other: &Polygon, cmp: &C) -> bool {
        let separated = self
            .axes()
            .into_iter()
            .chain(other.axes())
            .any(|axis| {
                self.project(&axis)
                    .is_separated_from(&other.project(&axis), cmp)
            });
        !separated
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
