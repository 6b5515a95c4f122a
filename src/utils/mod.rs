//! Various unsorted geometrical and logical operators.

pub use self::point_in_poly2d::{point_in_poly2d, winding_number2d};
pub use self::point_in_triangle::{
    corner_direction, determinant2x3, is_point_in_triangle, Orientation,
};
pub use self::segments_intersection::{line_intersection2d, segments_intersection2d};

mod point_in_poly2d;
pub mod point_in_triangle;
mod segments_intersection;
