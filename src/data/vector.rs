use array_init::array_init;
use num_traits::{NumOps, Zero};
use std::ops::Index;
use std::ops::Mul;

use crate::data::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub [T; N]);

impl<T, const N: usize> Vector<T, N>
where
  T: Clone + Zero + NumOps,
{
  pub fn dot(&self, other: &Vector<T, N>) -> T {
    self
      .0
      .iter()
      .zip(other.0.iter())
      .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T, const N: usize> From<Point<T, N>> for Vector<T, N> {
  fn from(point: Point<T, N>) -> Vector<T, N> {
    Vector(point.array)
  }
}

impl<T, const N: usize> Mul<T> for Vector<T, N>
where
  T: NumOps + Clone,
{
  type Output = Vector<T, N>;

  fn mul(self: Vector<T, N>, other: T) -> Self::Output {
    Vector(array_init(|i| self.0[i].clone() * other.clone()))
  }
}
