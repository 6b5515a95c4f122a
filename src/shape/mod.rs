//! Shapes consumed by the slicer.

pub use self::collider_shape::{ColliderShape, DEFAULT_BALL_SUBDIVISIONS};
pub use self::cut_line::{CutHits, CutLine, LineSide};
pub use self::polygon::Polygon;

mod collider_shape;
mod cut_line;
mod polygon;
