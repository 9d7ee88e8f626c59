// #![deny(warnings)]
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Closest point inside simple polygons.
//!
//! Given a simple polygon (convex or concave, either winding direction) and a
//! query point, find the point on or inside the polygon that is closest to the
//! query. Points inside the polygon, or on its boundary, are returned as-is.
//! Points outside are projected onto the nearest boundary edge.
//!
//! ```rust
//! # use polyreach::data::{Point, Polygon};
//! let square = Polygon::new(vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([10.0, 0.0]),
//!   Point::new([10.0, 10.0]),
//!   Point::new([0.0, 10.0]),
//! ])?;
//! assert_eq!(square.closest_point(&Point::new([5.0, 5.0]))?, Point::new([5.0, 5.0]));
//! assert_eq!(square.closest_point(&Point::new([15.0, 5.0]))?, Point::new([10.0, 5.0]));
//! # Ok::<(), polyreach::Error>(())
//! ```
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::Debug;

pub mod algorithms;
pub mod data;
mod orientation;
pub mod presets;
mod tolerance;

pub use orientation::Orientation;
pub use tolerance::Tolerance;

#[doc(inline)]
pub use algorithms::closest_point::{
  closest_point_in_polygon, closest_point_on_segment, is_point_in_polygon,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A polygon needs at least three vertices.
  InvalidPolygon,
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidPolygon => write!(f, "Polygon must have at least 3 vertices"),
    }
  }
}

impl std::error::Error for Error {}

/// Total order over scalars, used to rank candidate distances.
pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;
}

/// Coordinate type of points and polygons.
///
/// Implemented for `f32`, `f64` and their `OrderedFloat` wrappers.
pub trait PolygonScalar: Float + TotalOrd + Debug {
  /// Reference tolerance (`1e-10`) used by [`Tolerance::default`].
  fn default_tolerance() -> Self;

  /// Sign of the cross product `(q - p) × (r - p)`.
  ///
  /// `Greater` when `r` lies strictly left of the directed line `p → q`.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

fn orient2d_ordering(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> Ordering {
  // Adaptive-precision predicate, the sign is exact for every finite input.
  let orient = geometry_predicates::predicates::orient2d(p, q, r);
  if orient > 0.0 {
    Ordering::Greater
  } else if orient < 0.0 {
    Ordering::Less
  } else {
    Ordering::Equal
  }
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl PolygonScalar for $ty {
        fn default_tolerance() -> Self {
          1e-10
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          orient2d_ordering(
            [f64::from(p[0]), f64::from(p[1])],
            [f64::from(q[0]), f64::from(q[1])],
            [f64::from(r[0]), f64::from(r[1])],
          )
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl PolygonScalar for $ty {
        fn default_tolerance() -> Self {
          OrderedFloat(1e-10)
        }

        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          orient2d_ordering(
            [f64::from(p[0].into_inner()), f64::from(p[1].into_inner())],
            [f64::from(q[0].into_inner()), f64::from(q[1].into_inner())],
            [f64::from(r[0].into_inner()), f64::from(r[1].into_inner())],
          )
        }
      }
    )*
  };
}

floating_precision!(f32, f64);
wrapped_floating_precision!(OrderedFloat<f32>, OrderedFloat<f64>);

#[cfg(test)]
pub mod testing;
