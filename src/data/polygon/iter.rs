use crate::data::DirectedEdge;
use crate::data::Point;

pub struct Iter<'a, T: 'a> {
  pub(crate) iter: std::slice::Iter<'a, Point<T, 2>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a Point<T, 2>;
  fn next(&mut self) -> Option<&'a Point<T, 2>> {
    self.iter.next()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    self.iter.size_hint()
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Boundary edges of a closed vertex ring, in vertex order.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) % n`, so the last edge
/// closes the ring back to the first vertex.
pub struct EdgeIter<'a, T: 'a> {
  points: &'a [Point<T, 2>],
  head: usize,
  tail: usize, // exclusive
}

impl<'a, T> EdgeIter<'a, T> {
  pub fn new(points: &'a [Point<T, 2>]) -> EdgeIter<'a, T> {
    EdgeIter {
      points,
      head: 0,
      tail: points.len(),
    }
  }

  fn edge(&self, idx: usize) -> DirectedEdge<'a, T> {
    let next = if idx + 1 == self.points.len() { 0 } else { idx + 1 };
    DirectedEdge {
      src: &self.points[idx],
      dst: &self.points[next],
    }
  }
}

impl<T> Clone for EdgeIter<'_, T> {
  fn clone(&self) -> Self {
    EdgeIter {
      points: self.points,
      head: self.head,
      tail: self.tail,
    }
  }
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = DirectedEdge<'a, T>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.head >= self.tail {
      return None;
    }
    let out = self.edge(self.head);
    self.head += 1;
    Some(out)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl<T> ExactSizeIterator for EdgeIter<'_, T> {
  fn len(&self) -> usize {
    self.tail - self.head
  }
}

impl<T> DoubleEndedIterator for EdgeIter<'_, T> {
  fn next_back(&mut self) -> Option<Self::Item> {
    if self.head >= self.tail {
      return None;
    }
    self.tail -= 1;
    Some(self.edge(self.tail))
  }
}
