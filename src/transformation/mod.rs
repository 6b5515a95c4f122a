//! Ordering, triangulation and splitting of polygons.

pub use self::ear_clipping::triangulate_ear_clipping;
pub use self::polygon_split::{
    classify, split_polygon, PolygonClass, PolygonSplitError, SplitPolygon, SplitTolerances,
    SplitWorkspace,
};
pub use self::vertex_ordering::{
    is_convex, make_convex, orient, polygon_centroid, signed_area, MAKE_CONVEX_MAX_PASSES,
};

mod ear_clipping;
pub mod polygon_split;
pub mod vertex_ordering;
