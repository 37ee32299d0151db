//! Scalar comparison primitive used by the geometry kernel.
//!
//! Every floating-point comparison the SAT test makes goes through a
//! [`Comparator`], so a tolerance-based variant can replace exact comparison
//! without touching the algorithm itself.

/// Comparison of two scalar coordinates or projections.
pub trait Comparator {
    /// `a` is strictly less than `b`.
    fn less(&self, a: f64, b: f64) -> bool;

    /// `a` and `b` are considered equal.
    fn equal(&self, a: f64, b: f64) -> bool;
}

/// Exact IEEE-754 comparison. Default for [`Polygon::intersects`](super::Polygon::intersects).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl Comparator for Exact {
    #[inline]
    fn less(&self, a: f64, b: f64) -> bool {
        a < b
    }

    #[inline]
    fn equal(&self, a: f64, b: f64) -> bool {
        a == b
    }
}

/// Comparison with an absolute tolerance.
///
/// `less` only holds when `b` exceeds `a` by more than `epsilon`, so shapes
/// separated by a gap no wider than `epsilon` are reported as touching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub epsilon: f64,
}

impl Tolerance {
    #[inline]
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon: epsilon.abs(),
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(1e-9)
    }
}

impl Comparator for Tolerance {
    #[inline]
    fn less(&self, a: f64, b: f64) -> bool {
        a < b - self.epsilon
    }

    #[inline]
    fn equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }
}
