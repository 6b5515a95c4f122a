use super::{SplitPolygon, SplitTolerances};
use crate::shape::{CutHits, CutLine, Polygon};
use crate::transformation::vertex_ordering::orient;

/// Splits a convex polygon in two along `cut`.
///
/// Vertices strictly on the left of the cut go to the first piece, the others to the
/// second one. Both pieces also receive the entry and exit points `hits`, then get
/// re-ordered into counter-clockwise loops.
///
/// Returns `None` unless both pieces are convex, have at least three vertices and an area
/// of at least `tolerances.min_area`.
pub fn split_convex(
    polygon: &Polygon,
    cut: &CutLine,
    hits: &CutHits,
    tolerances: &SplitTolerances,
) -> Option<[SplitPolygon; 2]> {
    let mut left = vec![hits.enter, hits.exit];
    let mut right = vec![hits.enter, hits.exit];

    for pt in polygon.vertices() {
        if cut.determinant(pt) > 0.0 {
            left.push(*pt);
        } else {
            right.push(*pt);
        }
    }

    let left = SplitPolygon::accept(orient(&left), tolerances, true)?;
    let right = SplitPolygon::accept(orient(&right), tolerances, true)?;
    Some([left, right])
}
