mod compare;
mod point;
mod polygon;

pub use compare::{Comparator, Exact, Tolerance};
pub use point::Point;
pub use polygon::{Polygon, Projection};
