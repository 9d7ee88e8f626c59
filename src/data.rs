mod directed_edge;
pub(crate) mod point;
pub mod polygon;
mod vector;

pub use directed_edge::*;

#[doc(inline)]
pub use crate::data::polygon::{EdgeIter, Polygon};
pub use point::Point;
pub use vector::Vector;

/// Where a query point lies relative to a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}

impl PointLocation {
  /// Boundary points count as inside.
  pub fn is_inside(self) -> bool {
    !matches!(self, PointLocation::Outside)
  }
}
