//! Point membership and closest-point queries over simple polygons.
//!
//! Every query is `O(n)` in the number of vertices and allocation free. The
//! functions here work on plain vertex slices; [`Polygon`](crate::data::Polygon)
//! exposes the same queries as methods.
use log::{debug, trace};
use num_traits::Float;

use crate::data::{DirectedEdge, EdgeIter, Point, PointLocation};
use crate::{Error, PolygonScalar, Tolerance, TotalOrd};

/// Result of a nearest-point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<T> {
  /// Closest point on or inside the polygon.
  pub point: Point<T, 2>,
  /// Squared distance from the query to `point`. Zero when the query is inside.
  pub squared_distance: T,
  /// Location of the query point.
  pub location: PointLocation,
  /// Index of the boundary edge `point` was projected onto. `None` when the
  /// query is inside or on the boundary.
  pub edge: Option<usize>,
}

impl<T: Float> Nearest<T> {
  pub fn distance(&self) -> T {
    self.squared_distance.sqrt()
  }

  pub fn is_inside(&self) -> bool {
    self.location.is_inside()
  }
}

/// Closest point to `p` on the segment `[a, b]`.
///
/// Zero-length segments yield `a`.
///
/// ```rust
/// # use polyreach::closest_point_on_segment;
/// # use polyreach::data::Point;
/// let a = Point::new([0.0, 0.0]);
/// let b = Point::new([10.0, 10.0]);
/// assert_eq!(closest_point_on_segment(&a, &b, &Point::new([10.0, 0.0])), Point::new([5.0, 5.0]));
/// assert_eq!(closest_point_on_segment(&a, &a, &Point::new([10.0, 0.0])), a);
/// ```
pub fn closest_point_on_segment<T>(a: &Point<T, 2>, b: &Point<T, 2>, p: &Point<T, 2>) -> Point<T, 2>
where
  T: PolygonScalar,
{
  DirectedEdge::new(a, b).closest_point(p)
}

pub fn closest_point_on_segment_with<T>(
  a: &Point<T, 2>,
  b: &Point<T, 2>,
  p: &Point<T, 2>,
  tolerance: &Tolerance<T>,
) -> Point<T, 2>
where
  T: PolygonScalar,
{
  DirectedEdge::new(a, b).closest_point_with(p, tolerance)
}

/// $O(n)$ Classify `p` against the closed ring `vertices`.
///
/// Uses the winding number, so both convex and concave polygons in either
/// orientation are handled. A point within the boundary tolerance of any
/// edge is reported as [`PointLocation::OnBoundary`] as soon as that edge is
/// reached. Fewer than three vertices enclose nothing and always yield
/// [`PointLocation::Outside`].
pub fn locate_point<T>(vertices: &[Point<T, 2>], p: &Point<T, 2>) -> PointLocation
where
  T: PolygonScalar,
{
  locate_point_with(vertices, p, &Tolerance::default())
}

pub fn locate_point_with<T>(
  vertices: &[Point<T, 2>],
  p: &Point<T, 2>,
  tolerance: &Tolerance<T>,
) -> PointLocation
where
  T: PolygonScalar,
{
  if vertices.len() < 3 {
    return PointLocation::Outside;
  }
  let mut winding_number: isize = 0;
  for edge in EdgeIter::new(vertices) {
    if edge.squared_distance_to_with(p, tolerance) < tolerance.boundary {
      return PointLocation::OnBoundary;
    }
    winding_number += edge.crossing(p);
  }
  if winding_number != 0 {
    PointLocation::Inside
  } else {
    PointLocation::Outside
  }
}

/// $O(n)$ True if `p` is inside `vertices` or on its boundary.
///
/// ```rust
/// # use polyreach::is_point_in_polygon;
/// # use polyreach::data::Point;
/// let triangle = [
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([5.0, 10.0]),
/// ];
/// assert!(is_point_in_polygon(&triangle, &Point::new([5.0, 5.0])));
/// assert!(is_point_in_polygon(&triangle, &Point::new([5.0, 0.0])));
/// assert!(!is_point_in_polygon(&triangle, &Point::new([0.0, 10.0])));
/// assert!(!is_point_in_polygon(&triangle[..2], &Point::new([5.0, 0.0])));
/// ```
pub fn is_point_in_polygon<T>(vertices: &[Point<T, 2>], p: &Point<T, 2>) -> bool
where
  T: PolygonScalar,
{
  locate_point(vertices, p).is_inside()
}

pub fn is_point_in_polygon_with<T>(
  vertices: &[Point<T, 2>],
  p: &Point<T, 2>,
  tolerance: &Tolerance<T>,
) -> bool
where
  T: PolygonScalar,
{
  locate_point_with(vertices, p, tolerance).is_inside()
}

/// $O(n)$ Closest point to `pos` that lies inside or on the boundary of `vertices`.
///
/// Points inside or on the boundary are returned unchanged. Otherwise the
/// projection onto the nearest edge is returned; on ties the first such edge
/// in vertex order wins.
///
/// # Errors
///
/// [`Error::InvalidPolygon`] if `vertices` has fewer than three points.
///
/// ```rust
/// # use polyreach::{closest_point_in_polygon, Error};
/// # use polyreach::data::Point;
/// let square = [
///   Point::new([0.0, 0.0]),
///   Point::new([10.0, 0.0]),
///   Point::new([10.0, 10.0]),
///   Point::new([0.0, 10.0]),
/// ];
/// assert_eq!(closest_point_in_polygon(&square, &Point::new([5.0, -3.0])), Ok(Point::new([5.0, 0.0])));
/// assert_eq!(closest_point_in_polygon(&square[..2], &Point::new([5.0, -3.0])), Err(Error::InvalidPolygon));
/// ```
pub fn closest_point_in_polygon<T>(
  vertices: &[Point<T, 2>],
  pos: &Point<T, 2>,
) -> Result<Point<T, 2>, Error>
where
  T: PolygonScalar,
{
  closest_point_in_polygon_with(vertices, pos, &Tolerance::default())
}

pub fn closest_point_in_polygon_with<T>(
  vertices: &[Point<T, 2>],
  pos: &Point<T, 2>,
  tolerance: &Tolerance<T>,
) -> Result<Point<T, 2>, Error>
where
  T: PolygonScalar,
{
  Ok(nearest_point_with(vertices, pos, tolerance)?.point)
}

/// Like [`closest_point_in_polygon`] but also reports the distance, the
/// location of `pos` and the winning edge.
pub fn nearest_point<T>(vertices: &[Point<T, 2>], pos: &Point<T, 2>) -> Result<Nearest<T>, Error>
where
  T: PolygonScalar,
{
  nearest_point_with(vertices, pos, &Tolerance::default())
}

pub fn nearest_point_with<T>(
  vertices: &[Point<T, 2>],
  pos: &Point<T, 2>,
  tolerance: &Tolerance<T>,
) -> Result<Nearest<T>, Error>
where
  T: PolygonScalar,
{
  if vertices.len() < 3 {
    debug!(
      "rejecting polygon with {} vertices, at least 3 are required",
      vertices.len()
    );
    return Err(Error::InvalidPolygon);
  }

  let location = locate_point_with(vertices, pos, tolerance);
  if location.is_inside() {
    return Ok(Nearest {
      point: *pos,
      squared_distance: T::zero(),
      location,
      edge: None,
    });
  }

  // min_by keeps the first of several equal minima.
  let (edge, point, squared_distance) = EdgeIter::new(vertices)
    .enumerate()
    .map(|(idx, edge)| {
      let candidate = edge.closest_point_with(pos, tolerance);
      let dist = candidate.squared_euclidean_distance(pos);
      (idx, candidate, dist)
    })
    .min_by(|a, b| TotalOrd::total_cmp(&a.2, &b.2))
    .ok_or(Error::InvalidPolygon)?;

  trace!(
    "query {:?} is outside, nearest point {:?} on edge {} (squared distance {:?})",
    pos,
    point,
    edge,
    squared_distance
  );

  Ok(Nearest {
    point,
    squared_distance,
    location,
    edge: Some(edge),
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Polygon;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_ok_eq};
  use ordered_float::OrderedFloat;
  use proptest::prelude::*;
  use test_strategy::proptest;

  fn pt(x: f64, y: f64) -> Point<f64, 2> {
    Point::new([x, y])
  }

  fn square() -> Vec<Point<f64, 2>> {
    vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)]
  }

  fn lshape() -> Vec<Point<f64, 2>> {
    vec![
      pt(0.0, 0.0),
      pt(10.0, 0.0),
      pt(10.0, 5.0),
      pt(5.0, 5.0),
      pt(5.0, 10.0),
      pt(0.0, 10.0),
    ]
  }

  #[test]
  fn square_inside() {
    assert_ok_eq!(closest_point_in_polygon(&square(), &pt(5.0, 5.0)), pt(5.0, 5.0));
  }

  #[test]
  fn square_outside_right() {
    let nearest = nearest_point(&square(), &pt(15.0, 5.0)).unwrap();
    assert_eq!(nearest.point, pt(10.0, 5.0));
    assert_eq!(nearest.distance(), 5.0);
    assert_eq!(nearest.edge, Some(1));
    assert_eq!(nearest.location, PointLocation::Outside);
  }

  #[test]
  fn square_outside_below() {
    let nearest = nearest_point(&square(), &pt(5.0, -3.0)).unwrap();
    assert_eq!(nearest.point, pt(5.0, 0.0));
    assert_eq!(nearest.distance(), 3.0);
  }

  #[test]
  fn triangle_boundary() {
    let triangle = [pt(0.0, 0.0), pt(10.0, 0.0), pt(5.0, 10.0)];
    assert_eq!(locate_point(&triangle, &pt(5.0, 0.0)), PointLocation::OnBoundary);
    assert_ok_eq!(closest_point_in_polygon(&triangle, &pt(5.0, 0.0)), pt(5.0, 0.0));
  }

  #[test]
  fn lshape_notch() {
    let poly = lshape();
    let query = pt(7.0, 7.0);
    assert!(!is_point_in_polygon(&poly, &query));
    // The convex hull contains the query, a hull-based answer would echo it.
    let nearest = nearest_point(&poly, &query).unwrap();
    assert_ne!(nearest.point, query);
    assert!((nearest.distance() - 2.0).abs() < 1e-12);
    // (10,5)-(5,5) and (5,5)-(5,10) are equally near; the first one wins.
    assert_eq!(nearest.edge, Some(2));
    assert_eq!(nearest.point, pt(7.0, 5.0));
  }

  #[test]
  fn lshape_inside_both_arms() {
    let poly = lshape();
    assert!(is_point_in_polygon(&poly, &pt(8.0, 2.0)));
    assert!(is_point_in_polygon(&poly, &pt(2.0, 8.0)));
    assert!(is_point_in_polygon(&poly, &pt(5.0, 5.0)));
    assert!(!is_point_in_polygon(&poly, &pt(5.1, 5.1)));
  }

  #[test]
  fn two_vertices_rejected() {
    assert_err_eq!(
      closest_point_in_polygon(&[pt(0.0, 0.0), pt(1.0, 1.0)], &pt(3.0, 3.0)),
      Error::InvalidPolygon
    );
    assert!(!is_point_in_polygon(&[pt(0.0, 0.0), pt(1.0, 1.0)], &pt(0.5, 0.5)));
  }

  #[test]
  fn ties_resolve_to_first_edge() {
    // Edges 0 and 3 both clamp to the corner (0,0).
    let nearest = nearest_point(&square(), &pt(-5.0, -5.0)).unwrap();
    assert_eq!(nearest.point, pt(0.0, 0.0));
    assert_eq!(nearest.edge, Some(0));
  }

  #[test]
  fn ties_resolve_to_first_edge_for_every_scalar() {
    // (7,5) on edge 2 and (5,7) on edge 3 are both at distance 2.
    let query = pt(7.0, 7.0);
    let wrapped: Vec<Point<OrderedFloat<f64>, 2>> =
      lshape().iter().map(|p| p.cast(OrderedFloat)).collect();
    let nearest = nearest_point(&wrapped, &query.cast(OrderedFloat)).unwrap();
    assert_eq!(nearest.edge, Some(2));
    assert_eq!(nearest.point, pt(7.0, 5.0).cast(OrderedFloat));
    assert_eq!(nearest.squared_distance, OrderedFloat(4.0));

    let single: Vec<Point<f32, 2>> = lshape().iter().map(|p| p.cast(|v| v as f32)).collect();
    let nearest = nearest_point(&single, &query.cast(|v| v as f32)).unwrap();
    assert_eq!(nearest.edge, Some(2));
    assert_eq!(nearest.point, Point::new([7.0_f32, 5.0]));
  }

  #[test]
  fn vertex_on_horizontal_line() {
    // The query's horizontal line passes through the apex vertex (5,10).
    let triangle = [pt(0.0, 0.0), pt(10.0, 0.0), pt(5.0, 10.0)];
    assert!(!is_point_in_polygon(&triangle, &pt(0.0, 10.0)));
    assert!(!is_point_in_polygon(&triangle, &pt(10.0, 10.0)));
    // And through both bottom vertices.
    assert!(!is_point_in_polygon(&triangle, &pt(-3.0, 0.0)));
    assert!(!is_point_in_polygon(&triangle, &pt(13.0, 0.0)));
    // A diamond has vertices left and right of the query at the same height.
    let diamond = [pt(0.0, -5.0), pt(5.0, 0.0), pt(0.0, 5.0), pt(-5.0, 0.0)];
    assert!(is_point_in_polygon(&diamond, &pt(0.0, 0.0)));
    assert!(!is_point_in_polygon(&diamond, &pt(-7.0, 0.0)));
    assert!(!is_point_in_polygon(&diamond, &pt(7.0, 0.0)));
  }

  #[test]
  fn boundary_tolerance() {
    // 1e-6 away: squared distance 1e-12 is below the 1e-10 threshold.
    assert_eq!(
      locate_point(&square(), &pt(5.0, -1e-6)),
      PointLocation::OnBoundary
    );
    assert_ok_eq!(
      closest_point_in_polygon(&square(), &pt(5.0, -1e-6)),
      pt(5.0, -1e-6)
    );
    let strict = Tolerance::new(1e-10, 1e-14);
    assert_eq!(
      locate_point_with(&square(), &pt(5.0, -1e-6), &strict),
      PointLocation::Outside
    );
    assert_ok_eq!(
      closest_point_in_polygon_with(&square(), &pt(5.0, -1e-6), &strict),
      pt(5.0, 0.0)
    );
  }

  #[test]
  fn single_precision() {
    let square: Vec<Point<f32, 2>> = square().iter().map(|p| p.cast(|v| v as f32)).collect();
    assert_ok_eq!(
      closest_point_in_polygon(&square, &Point::new([15.0, 5.0])),
      Point::new([10.0_f32, 5.0])
    );
  }

  #[test]
  fn segment_free_function() {
    let (a, b) = (pt(0.0, 0.0), pt(10.0, 0.0));
    assert_eq!(closest_point_on_segment(&a, &b, &pt(-1.0, 1.0)), a);
    assert_eq!(closest_point_on_segment(&a, &b, &pt(11.0, 1.0)), b);
    assert_eq!(
      closest_point_on_segment_with(&a, &b, &pt(3.0, 1.0), &Tolerance::default()),
      pt(3.0, 0.0)
    );
  }

  #[proptest]
  fn inside_points_are_echoed(
    #[strategy(star_polygon())] poly: Polygon<f64>,
    #[strategy(any_point_within(200.0))] query: Point<f64, 2>,
  ) {
    if is_point_in_polygon(poly.points(), &query) {
      prop_assert_eq!(closest_point_in_polygon(poly.points(), &query)?, query);
    }
  }

  #[proptest]
  fn vertices_are_on_boundary(#[strategy(star_polygon())] poly: Polygon<f64>) {
    for vertex in poly.iter() {
      prop_assert_eq!(locate_point(poly.points(), vertex), PointLocation::OnBoundary);
      prop_assert_eq!(closest_point_in_polygon(poly.points(), vertex)?, *vertex);
    }
  }

  #[proptest]
  fn star_center_is_inside(#[strategy(star_polygon())] poly: Polygon<f64>) {
    prop_assert_eq!(locate_point(poly.points(), &Point::zero()), PointLocation::Inside);
  }

  #[proptest]
  fn outside_points_land_on_an_edge(
    #[strategy(star_polygon())] poly: Polygon<f64>,
    #[strategy(any_point_within(200.0))] query: Point<f64, 2>,
  ) {
    let nearest = nearest_point(poly.points(), &query)?;
    if !nearest.is_inside() {
      prop_assert!(poly
        .iter_boundary_edges()
        .any(|edge| edge.closest_point(&query) == nearest.point));
      prop_assert!(is_point_in_polygon(poly.points(), &nearest.point));
      // Nothing on the boundary is nearer than the reported point.
      for edge in poly.iter_boundary_edges() {
        prop_assert!(edge.squared_distance_to(&query) >= nearest.squared_distance);
      }
    }
  }

  #[proptest]
  fn distance_grows_along_outward_ray(
    #[strategy(convex_polygon())] poly: Polygon<f64>,
    #[strategy(any_point_within(300.0))] query: Point<f64, 2>,
    #[strategy(1.0..10.0)] stretch: f64,
  ) {
    let near = nearest_point(poly.points(), &query)?;
    prop_assume!(!near.is_inside());
    let further = &near.point + &((&query - &near.point) * stretch);
    let far = nearest_point(poly.points(), &further)?;
    prop_assert!(far.distance() >= near.distance() * (1.0 - 1e-9));
  }

  #[proptest]
  fn reversal_does_not_matter(
    #[strategy(star_polygon())] poly: Polygon<f64>,
    #[strategy(any_point_within(200.0))] query: Point<f64, 2>,
  ) {
    let reversed = poly.clone().reversed();
    let forward = nearest_point(poly.points(), &query)?;
    let backward = nearest_point(reversed.points(), &query)?;
    prop_assert_eq!(forward.is_inside(), backward.is_inside());
    let diff = (forward.distance() - backward.distance()).abs();
    prop_assert!(diff <= 1e-9 * (1.0 + forward.distance()));
  }

  proptest! {
    #[test]
    fn degenerate_rings_are_outside(a in any_point(), b in any_point(), p in any_point()) {
      prop_assert!(!is_point_in_polygon(&[a, b], &p));
      prop_assert!(!is_point_in_polygon(&[a], &p));
      prop_assert!(closest_point_in_polygon(&[a, b], &p).is_err());
    }
  }
}
