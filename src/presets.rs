//! Sample polygons in pixel coordinates (y grows downwards).
//!
//! Handy for demos, benchmarks and smoke tests. Every preset is a simple
//! polygon; `lshape`, `star` and `complex` are concave.
use claims::debug_assert_ok;

use crate::data::Polygon;

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 6] = ["square", "lshape", "triangle", "pentagon", "star", "complex"];

fn preset(points: &[(f64, f64)]) -> Polygon<f64> {
  let poly = Polygon::new_unchecked(points.iter().map(|&pt| pt.into()).collect());
  debug_assert_ok!(poly.validate());
  poly
}

pub fn square() -> Polygon<f64> {
  preset(&[(200.0, 150.0), (600.0, 150.0), (600.0, 450.0), (200.0, 450.0)])
}

pub fn lshape() -> Polygon<f64> {
  preset(&[
    (150.0, 100.0),
    (400.0, 100.0),
    (400.0, 250.0),
    (650.0, 250.0),
    (650.0, 500.0),
    (150.0, 500.0),
  ])
}

pub fn triangle() -> Polygon<f64> {
  preset(&[(400.0, 100.0), (650.0, 500.0), (150.0, 500.0)])
}

pub fn pentagon() -> Polygon<f64> {
  preset(&[
    (400.0, 100.0),
    (600.0, 220.0),
    (520.0, 450.0),
    (280.0, 450.0),
    (200.0, 220.0),
  ])
}

pub fn star() -> Polygon<f64> {
  preset(&[
    (400.0, 80.0),
    (440.0, 240.0),
    (600.0, 240.0),
    (470.0, 340.0),
    (520.0, 500.0),
    (400.0, 400.0),
    (280.0, 500.0),
    (330.0, 340.0),
    (200.0, 240.0),
    (360.0, 240.0),
  ])
}

pub fn complex() -> Polygon<f64> {
  preset(&[
    (150.0, 150.0),
    (300.0, 100.0),
    (450.0, 150.0),
    (500.0, 250.0),
    (650.0, 300.0),
    (550.0, 400.0),
    (500.0, 500.0),
    (350.0, 450.0),
    (250.0, 500.0),
    (150.0, 400.0),
    (100.0, 250.0),
  ])
}

/// Look up a preset by name.
///
/// ```rust
/// # use polyreach::presets;
/// assert_eq!(presets::by_name("triangle").map(|p| p.len()), Some(3));
/// assert!(presets::by_name("hexagon").is_none());
/// ```
pub fn by_name(name: &str) -> Option<Polygon<f64>> {
  match name {
    "square" => Some(square()),
    "lshape" => Some(lshape()),
    "triangle" => Some(triangle()),
    "pentagon" => Some(pentagon()),
    "star" => Some(star()),
    "complex" => Some(complex()),
    _ => None,
  }
}
