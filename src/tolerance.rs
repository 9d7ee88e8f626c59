use crate::PolygonScalar;

/// Squared-distance thresholds used by the polygon queries.
///
/// Both fields are compared against *squared* lengths, so the effective linear
/// tolerance is the square root of the stored value. The defaults reproduce the
/// reference constant `1e-10` for both purposes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T> {
  /// Segments whose squared length is below this are treated as a single point.
  pub degenerate_segment: T,
  /// Query points whose squared distance to an edge is below this are on the boundary.
  pub boundary: T,
}

impl<T> Tolerance<T> {
  pub const fn new(degenerate_segment: T, boundary: T) -> Tolerance<T> {
    Tolerance {
      degenerate_segment,
      boundary,
    }
  }

  /// Use the same threshold for both purposes.
  pub fn uniform(epsilon: T) -> Tolerance<T>
  where
    T: Clone,
  {
    Tolerance {
      degenerate_segment: epsilon.clone(),
      boundary: epsilon,
    }
  }
}

impl<T: PolygonScalar> Default for Tolerance<T> {
  fn default() -> Self {
    Tolerance::uniform(T::default_tolerance())
  }
}
