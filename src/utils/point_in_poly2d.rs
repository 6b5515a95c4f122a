use crate::math::{Point, Real};

/// Computes the winding number of `poly` around `pt`.
///
/// Every edge crossing the horizontal half-line starting at `pt` and going
/// toward `+x` contributes `+1` when it goes upward with `pt` on its left and
/// `-1` when it goes downward with `pt` on its right.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge.
pub fn winding_number2d(pt: &Point<Real>, poly: &[Point<Real>]) -> i32 {
    let mut winding = 0i32;

    for (i, a) in poly.iter().enumerate() {
        let b = poly[(i + 1) % poly.len()];
        let is_left = (b - a).perp(&(pt - a));

        if a.y <= pt.y {
            if b.y > pt.y && is_left > 0.0 {
                winding += 1;
            }
        } else if b.y <= pt.y && is_left < 0.0 {
            winding -= 1;
        }
    }

    winding
}

/// Tests if the given point is inside an arbitrary closed polygon with arbitrary orientation,
/// using a signed winding number.
///
/// A point is inside when the winding number of the polygon around it is non-zero. Points
/// lying exactly on the boundary are not guaranteed to be reported as inside: this is
/// what the slicer relies on to accept cut endpoints touching an outline.
///
/// The polygon is assumed to be closed, i.e., first and last point of the polygon are implicitly
/// assumed to be connected by an edge.
pub fn point_in_poly2d(pt: &Point<Real>, poly: &[Point<Real>]) -> bool {
    if poly.is_empty() {
        return false;
    }

    winding_number2d(pt, poly) != 0
}
