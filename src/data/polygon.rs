use log::debug;
use num_traits::FloatConst;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::algorithms::closest_point::{self, Nearest};
use crate::data::{Point, PointLocation};
use crate::{Error, Orientation, PolygonScalar, Tolerance};

mod iter;
pub use iter::*;

/// Simple polygon without holes.
///
/// The vertex ring is implicitly closed: the last vertex connects back to the
/// first. Vertices may be given in either clockwise or counter-clockwise order.
/// Self-intersections are not detected.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T, 2>>,
}

impl<T> Polygon<T> {
  /// $O(1)$ Wrap `points` without checking the vertex count.
  pub fn new_unchecked(points: Vec<Point<T, 2>>) -> Polygon<T> {
    Polygon { points }
  }

  /// $O(1)$
  ///
  /// # Errors
  ///
  /// [`Error::InvalidPolygon`] if fewer than three points are given.
  pub fn new(points: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error> {
    let p = Self::new_unchecked(points);
    p.validate()?;
    Ok(p)
  }

  /// ```rust
  /// # use polyreach::data::Polygon;
  /// let triangle = Polygon::from_tuples([(0.0, 0.0), (10.0, 0.0), (5.0, 10.0)])?;
  /// assert_eq!(triangle.len(), 3);
  /// # Ok::<(), polyreach::Error>(())
  /// ```
  pub fn from_tuples<I>(points: I) -> Result<Polygon<T>, Error>
  where
    I: IntoIterator<Item = (T, T)>,
  {
    Polygon::new(points.into_iter().map(Point::from).collect())
  }

  pub fn validate(&self) -> Result<(), Error> {
    if self.points.len() < 3 {
      debug!("polygon has {} vertices, need at least 3", self.points.len());
      return Err(Error::InvalidPolygon);
    }
    Ok(())
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point<T, 2>> {
    self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn iter(&self) -> Iter<'_, T> {
    Iter {
      iter: self.points.iter(),
    }
  }

  pub fn iter_boundary_edges(&self) -> EdgeIter<'_, T> {
    EdgeIter::new(&self.points)
  }

  pub fn map_points<F>(self, f: F) -> Polygon<T>
  where
    F: Fn(Point<T, 2>) -> Point<T, 2>,
  {
    Polygon {
      points: self.points.into_iter().map(f).collect(),
    }
  }

  pub fn cast<U, F>(self, f: F) -> Polygon<U>
  where
    T: Clone,
    F: Fn(T) -> U + Clone,
  {
    Polygon {
      points: self.points.iter().map(|p| p.cast(f.clone())).collect(),
    }
  }

  /// Flip the winding direction in place.
  pub fn reverse(&mut self) {
    self.points.reverse();
  }

  #[must_use]
  pub fn reversed(mut self) -> Polygon<T> {
    self.reverse();
    self
  }
}

impl<T: PolygonScalar> Polygon<T> {
  /// Twice the signed area. Positive for counter-clockwise rings.
  pub fn signed_area_2x(&self) -> T {
    self
      .iter_boundary_edges()
      .fold(T::zero(), |acc, edge| {
        let p = edge.src;
        let q = edge.dst;
        acc + (*p.x_coord() * *q.y_coord() - *q.x_coord() * *p.y_coord())
      })
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / (T::one() + T::one())
  }

  /// Winding direction of the vertex ring.
  pub fn orientation(&self) -> Orientation {
    let area = self.signed_area_2x();
    if area > T::zero() {
      Orientation::CounterClockWise
    } else if area < T::zero() {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  /// $O(n)$ Inside, on the boundary, or outside.
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    closest_point::locate_point(&self.points, pt)
  }

  pub fn locate_with(&self, pt: &Point<T, 2>, tolerance: &Tolerance<T>) -> PointLocation {
    closest_point::locate_point_with(&self.points, pt, tolerance)
  }

  /// $O(n)$ True for points inside or on the boundary.
  pub fn contains(&self, pt: &Point<T, 2>) -> bool {
    closest_point::is_point_in_polygon(&self.points, pt)
  }

  pub fn contains_with(&self, pt: &Point<T, 2>, tolerance: &Tolerance<T>) -> bool {
    closest_point::is_point_in_polygon_with(&self.points, pt, tolerance)
  }

  /// $O(n)$ Closest point on or inside the polygon.
  ///
  /// # Errors
  ///
  /// [`Error::InvalidPolygon`] for polygons built with
  /// [`Polygon::new_unchecked`] from fewer than three points.
  pub fn closest_point(&self, pos: &Point<T, 2>) -> Result<Point<T, 2>, Error> {
    closest_point::closest_point_in_polygon(&self.points, pos)
  }

  pub fn closest_point_with(
    &self,
    pos: &Point<T, 2>,
    tolerance: &Tolerance<T>,
  ) -> Result<Point<T, 2>, Error> {
    closest_point::closest_point_in_polygon_with(&self.points, pos, tolerance)
  }

  /// $O(n)$ Closest point together with its distance and the query's location.
  pub fn nearest(&self, pos: &Point<T, 2>) -> Result<Nearest<T>, Error> {
    closest_point::nearest_point(&self.points, pos)
  }

  pub fn nearest_with(
    &self,
    pos: &Point<T, 2>,
    tolerance: &Tolerance<T>,
  ) -> Result<Nearest<T>, Error> {
    closest_point::nearest_point_with(&self.points, pos, tolerance)
  }
}

impl<T> Polygon<T>
where
  T: PolygonScalar + FloatConst,
  Standard: Distribution<T>,
{
  /// $O(n)$ Random star-shaped polygon around the origin.
  ///
  /// Vertex `i` sits at a jittered angle inside the `i`-th of `n` equal
  /// sectors, at a radius between 1/4 and 1. Angles strictly increase, so the
  /// result is simple, counter-clockwise, and contains the origin.
  ///
  /// ```rust
  /// # use polyreach::data::{Point, Polygon};
  /// # use polyreach::Orientation;
  /// let poly = Polygon::<f64>::random_star(20, &mut rand::thread_rng())?;
  /// assert_eq!(poly.len(), 20);
  /// assert!(poly.contains(&Point::zero()));
  /// assert_eq!(poly.orientation(), Orientation::CounterClockWise);
  /// # Ok::<(), polyreach::Error>(())
  /// ```
  pub fn random_star<R>(n: usize, rng: &mut R) -> Result<Polygon<T>, Error>
  where
    R: Rng + ?Sized,
  {
    if n < 3 {
      return Err(Error::InvalidPolygon);
    }
    let one = T::one();
    let two = one + one;
    let quarter = one / (two * two);
    let sectors = (0..n).fold(T::zero(), |acc, _| acc + one);
    let step = (T::PI() + T::PI()) / sectors;
    let mut sector = T::zero();
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
      let angle = (sector + quarter * rng.gen::<T>()) * step;
      let radius = quarter + (one - quarter) * rng.gen::<T>();
      points.push(Point::new([radius * angle.cos(), radius * angle.sin()]));
      sector = sector + one;
    }
    Polygon::new(points)
  }
}
