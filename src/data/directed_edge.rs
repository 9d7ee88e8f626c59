use super::Point;
use crate::{Orientation, PolygonScalar, Tolerance};

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

/// Directed edge from `src` to `dst`, borrowed from a vertex slice.
#[derive(Debug, PartialEq, Eq)]
pub struct DirectedEdge<'a, T, const N: usize = 2> {
  pub src: &'a Point<T, N>,
  pub dst: &'a Point<T, N>,
}

impl<T, const N: usize> Copy for DirectedEdge<'_, T, N> {}
impl<T, const N: usize> Clone for DirectedEdge<'_, T, N> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, T, const N: usize> DirectedEdge<'a, T, N> {
  pub fn new(src: &'a Point<T, N>, dst: &'a Point<T, N>) -> DirectedEdge<'a, T, N> {
    DirectedEdge { src, dst }
  }
}

impl<'a, T: PolygonScalar> DirectedEdge<'a, T> {
  /// Closest point to `pt` on the closed segment `[src, dst]`.
  ///
  /// Uses [`Tolerance::default`]. See [`DirectedEdge::closest_point_with`].
  pub fn closest_point(self, pt: &Point<T, 2>) -> Point<T, 2> {
    self.closest_point_with(pt, &Tolerance::default())
  }

  /// Closest point to `pt` on the closed segment `[src, dst]`.
  ///
  /// Segments with a squared length below `tolerance.degenerate_segment` are
  /// treated as the single point `src`. When the projection falls before `src`
  /// or past `dst` the endpoint itself is returned.
  ///
  /// ```rust
  /// # use polyreach::data::{DirectedEdge, Point};
  /// let a = Point::new([0.0, 0.0]);
  /// let b = Point::new([10.0, 0.0]);
  /// let edge = DirectedEdge::new(&a, &b);
  /// assert_eq!(edge.closest_point(&Point::new([4.0, 3.0])), Point::new([4.0, 0.0]));
  /// assert_eq!(edge.closest_point(&Point::new([-4.0, 3.0])), a);
  /// assert_eq!(edge.closest_point(&Point::new([14.0, 3.0])), b);
  /// ```
  pub fn closest_point_with(self, pt: &Point<T, 2>, tolerance: &Tolerance<T>) -> Point<T, 2> {
    let direction = self.dst - self.src;
    let length_squared = direction.squared_magnitude();
    if length_squared < tolerance.degenerate_segment {
      return *self.src;
    }
    let t = (pt - self.src).dot(&direction) / length_squared;
    if t <= T::zero() {
      *self.src
    } else if t >= T::one() {
      *self.dst
    } else {
      self.src + &(direction * t)
    }
  }

  pub fn squared_distance_to(self, pt: &Point<T, 2>) -> T {
    self.squared_distance_to_with(pt, &Tolerance::default())
  }

  pub fn squared_distance_to_with(self, pt: &Point<T, 2>, tolerance: &Tolerance<T>) -> T {
    self
      .closest_point_with(pt, tolerance)
      .squared_euclidean_distance(pt)
  }

  pub fn orientation(self, pt: &Point<T, 2>) -> Orientation {
    self.src.orientation(self.dst, pt)
  }

  /// Winding-number contribution of this edge for `pt`.
  ///
  /// `+1` for an upward crossing with `pt` strictly left of the edge, `-1` for
  /// a downward crossing with `pt` strictly right of it, `0` otherwise. The
  /// lower endpoint is included and the upper one excluded so an edge passing
  /// through `pt`'s horizontal line through a vertex is counted once.
  pub fn crossing(self, pt: &Point<T, 2>) -> isize {
    let src_y = self.src.y_coord();
    let dst_y = self.dst.y_coord();
    let pt_y = pt.y_coord();
    if src_y <= pt_y {
      if dst_y > pt_y && self.orientation(pt).is_ccw() {
        return 1;
      }
    } else if dst_y <= pt_y && self.orientation(pt).is_cw() {
      return -1;
    }
    0
  }
}
