use super::{split_concave, split_convex, PolygonSplitError, SplitWorkspace};
use crate::math::{Point, Real};
use crate::shape::{CutHits, CutLine, Polygon};

/// Tolerances for the polygon split algorithms.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// # use slicer2d::transformation::polygon_split::SplitTolerances;
/// let tolerances = SplitTolerances {
///     min_area: 1.0e-3,
///     ..SplitTolerances::default()
/// };
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SplitTolerances {
    /// Pieces with an area smaller than this are discarded.
    pub min_area: Real,
    /// Half-width of the band around the cut line where points are considered on the line.
    pub side_epsilon: Real,
    /// Corners with a turn smaller than this are ignored by the convexity test.
    pub convexity_epsilon: Real,
}

impl Default for SplitTolerances {
    fn default() -> Self {
        Self {
            min_area: 1.0e-4,
            side_epsilon: Real::EPSILON,
            convexity_epsilon: 1.0e-6,
        }
    }
}

/// The class of a polygon, selecting the split algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PolygonClass {
    /// Split with the exact convex algorithm.
    Convex,
    /// Split with the boundary decomposition algorithm.
    Concave,
}

/// One piece of a split polygon, wound counter-clockwise.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SplitPolygon {
    /// The vertices of the piece.
    pub vertices: Vec<Point<Real>>,
    /// The area of the piece.
    pub area: Real,
}

impl SplitPolygon {
    /// Builds a piece from a vertex loop, checking it can be kept.
    ///
    /// The loop is re-wound counter-clockwise if needed. Returns `None` if it has fewer than
    /// three vertices, an area below `tolerances.min_area`, or, when `require_convex` is
    /// set, is not convex.
    pub(crate) fn accept(
        mut vertices: Vec<Point<Real>>,
        tolerances: &SplitTolerances,
        require_convex: bool,
    ) -> Option<Self> {
        if vertices.len() < 3 {
            log::debug!("Dropping split piece with {} vertices.", vertices.len());
            return None;
        }

        let mut area = crate::transformation::vertex_ordering::signed_area(&vertices);

        if area < 0.0 {
            vertices.reverse();
            area = -area;
        }

        if area < tolerances.min_area {
            log::debug!("Dropping split piece with area {}.", area);
            return None;
        }

        if require_convex
            && !crate::transformation::vertex_ordering::is_convex(
                &vertices,
                tolerances.convexity_epsilon,
            )
        {
            log::debug!("Dropping non-convex piece of a convex split.");
            return None;
        }

        Some(Self { vertices, area })
    }
}

/// Classifies `polygon` as convex or concave.
pub fn classify(polygon: &Polygon, epsilon: Real) -> PolygonClass {
    if polygon.is_convex(epsilon) {
        PolygonClass::Convex
    } else {
        PolygonClass::Concave
    }
}

/// Splits `polygon` along `cut`, picking the algorithm matching its class.
///
/// `hits` are the points where the cut enters and leaves the polygon; only the convex
/// algorithm uses them. An empty result means the cut did not produce acceptable pieces.
pub fn split_polygon(
    workspace: &mut SplitWorkspace,
    polygon: &Polygon,
    cut: &CutLine,
    hits: &CutHits,
    tolerances: &SplitTolerances,
) -> Result<Vec<SplitPolygon>, PolygonSplitError> {
    match classify(polygon, tolerances.convexity_epsilon) {
        PolygonClass::Convex => Ok(split_convex(polygon, cut, hits, tolerances)
            .map(Vec::from)
            .unwrap_or_default()),
        PolygonClass::Concave => split_concave(workspace, polygon, cut, tolerances),
    }
}
