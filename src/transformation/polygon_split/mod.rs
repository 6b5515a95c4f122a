//! Splitting a polygon in pieces along a cut.

pub use self::concave_split::split_concave;
pub use self::convex_split::split_convex;
pub use self::polygon_split::{
    classify, split_polygon, PolygonClass, SplitPolygon, SplitTolerances,
};
pub use self::polygon_split_error::PolygonSplitError;
pub use self::split_workspace::{LinkedPolygonPoint, SplitWorkspace};

mod concave_split;
mod convex_split;
mod polygon_split;
mod polygon_split_error;
mod split_workspace;
