// This module contains strategies for:
//  * points
//  * polygons
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Point, Polygon};

use core::ops::Range;
use proptest::arbitrary::*;
use proptest::prelude::*;
use proptest::strategy::*;
use rand::SeedableRng;

///////////////////////////////////////////////////////////////////////////////
// Points

// Bounded coordinates. Unbounded floats overflow squared distances.
pub fn any_point() -> impl Strategy<Value = Point<f64, 2>> {
  any_point_within(1000.0)
}

pub fn any_point_within(extent: f64) -> impl Strategy<Value = Point<f64, 2>> {
  (-extent..extent, -extent..extent).prop_map(|(x, y)| Point::new([x, y]))
}

///////////////////////////////////////////////////////////////////////////////
// Star-shaped polygons

// Random star around the origin, radii between 25 and 100.
pub fn star_polygon() -> impl Strategy<Value = Polygon<f64>> {
  star_polygon_with(3..50)
}

pub fn star_polygon_with(size: Range<usize>) -> impl Strategy<Value = Polygon<f64>> {
  (size, any::<u64>()).prop_filter_map("Need at least 3 vertices", |(n, seed)| {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
    Polygon::<f64>::random_star(n.max(3), rng)
      .ok()
      .map(|poly| poly.map_points(|pt| Point::new([pt[0] * 100.0, pt[1] * 100.0])))
  })
}

///////////////////////////////////////////////////////////////////////////////
// Convex polygons

// Vertices on the circle of radius 100 at increasing angles.
pub fn convex_polygon() -> impl Strategy<Value = Polygon<f64>> {
  (3usize..40, any::<u64>()).prop_filter_map("Need at least 3 vertices", |(n, seed)| {
    let rng = &mut rand::rngs::SmallRng::seed_from_u64(seed);
    let star = Polygon::<f64>::random_star(n, rng).ok()?;
    let points = star
      .iter()
      .map(|pt| {
        let angle = pt[1].atan2(pt[0]);
        Point::new([100.0 * angle.cos(), 100.0 * angle.sin()])
      })
      .collect();
    Polygon::new(points).ok()
  })
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary polygons

impl Arbitrary for Polygon<f64> {
  type Strategy = BoxedStrategy<Polygon<f64>>;
  type Parameters = Range<usize>;
  fn arbitrary_with(size_range: Self::Parameters) -> Self::Strategy {
    if size_range.is_empty() {
      star_polygon().boxed()
    } else {
      star_polygon_with(size_range).boxed()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_strategy::proptest;

  #[proptest]
  fn arbitrary_polygons_are_valid(poly: Polygon<f64>) {
    prop_assert!(poly.validate().is_ok());
    prop_assert!(poly.len() >= 3);
  }

  #[proptest]
  fn convex_polygons_turn_left(#[strategy(convex_polygon())] poly: Polygon<f64>) {
    for edge in poly.iter_boundary_edges() {
      for pt in poly.iter() {
        if pt != edge.src && pt != edge.dst {
          prop_assert!(!edge.orientation(pt).is_cw());
        }
      }
    }
  }
}
