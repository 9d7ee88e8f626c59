pub mod closest_point;

#[doc(inline)]
pub use closest_point::{
  closest_point_in_polygon, closest_point_in_polygon_with, closest_point_on_segment,
  closest_point_on_segment_with, is_point_in_polygon, is_point_in_polygon_with, locate_point,
  locate_point_with, nearest_point, nearest_point_with, Nearest,
};
