//! Winding, area and convexity of vertex loops.

use crate::math::{Point, Real};
use crate::utils::determinant2x3;
use ordered_float::OrderedFloat;

/// The maximum number of reflex-vertex removal passes done by [`make_convex`].
pub const MAKE_CONVEX_MAX_PASSES: usize = 25;

/// Orders an unordered set of points into a counter-clockwise loop.
///
/// The points are sorted lexicographically; the first and last sorted points form a
/// baseline chord. Points on the right of that chord form the lower chain, kept in
/// ascending order, the others form the upper chain, emitted in descending order. The
/// result is `[first, lower.., last, upper..]`.
///
/// This is exact for the vertices of a convex polygon (e.g. the vertex sets collected on
/// each side of a cut) but does not reconstruct arbitrary concave outlines. Exact
/// duplicates are merged.
pub fn orient(points: &[Point<Real>]) -> Vec<Point<Real>> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|pt| (OrderedFloat(pt.x), OrderedFloat(pt.y)));
    sorted.dedup_by(|a, b| ulps_eq!(a.x, b.x) && ulps_eq!(a.y, b.y));

    if sorted.len() < 3 {
        return sorted;
    }

    let start = sorted[0];
    let end = sorted[sorted.len() - 1];
    let mut lower = Vec::with_capacity(sorted.len());
    let mut upper = Vec::with_capacity(sorted.len());

    for pt in &sorted[1..sorted.len() - 1] {
        if determinant2x3(&start, &end, pt) < 0.0 {
            lower.push(*pt);
        } else {
            upper.push(*pt);
        }
    }

    let mut result = Vec::with_capacity(sorted.len());
    result.push(start);
    result.extend(lower);
    result.push(end);
    result.extend(upper.into_iter().rev());
    result
}

/// The signed area of a closed polygon (shoelace formula).
///
/// Positive for a counter-clockwise polygon, negative for a clockwise one.
pub fn signed_area(points: &[Point<Real>]) -> Real {
    let mut area = 0.0;

    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        area += a.x * b.y - b.x * a.y;
    }

    area * 0.5
}

/// The signed turn at the vertex `i` of a closed polygon.
#[inline]
fn corner_turn(points: &[Point<Real>], i: usize) -> Real {
    let n = points.len();
    let prev = points[(i + n - 1) % n];
    let next = points[(i + 1) % n];
    (points[i] - prev).perp(&(next - points[i]))
}

/// Checks if the closed polygon `points` is convex.
///
/// Walks the cross products of consecutive edge directions, wrap-around included. The
/// first product with a magnitude above `epsilon` sets the reference sign; the polygon
/// is not convex as soon as another product has the opposite sign with a magnitude above
/// `epsilon`. Near-collinear corners are ignored.
///
/// Polygons with less than 3 vertices are never convex.
pub fn is_convex(points: &[Point<Real>], epsilon: Real) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut reference: Real = 0.0;

    for i in 0..points.len() {
        let turn = corner_turn(points, i);

        if turn.abs() <= epsilon {
            continue;
        }

        if reference == 0.0 {
            reference = turn.signum();
        } else if turn * reference < 0.0 {
            return false;
        }
    }

    true
}

/// Removes reflex vertices from `points` until the polygon becomes convex.
///
/// A vertex is reflex when it turns against the winding of the whole polygon. At most
/// [`MAKE_CONVEX_MAX_PASSES`] removal passes are performed. Returns `None` if the result is
/// still not convex, or if fewer than three vertices remain.
pub fn make_convex(points: &[Point<Real>], epsilon: Real) -> Option<Vec<Point<Real>>> {
    let mut vertices = points.to_vec();
    let winding = signed_area(&vertices).signum();

    for _ in 0..MAKE_CONVEX_MAX_PASSES {
        if vertices.len() < 3 {
            return None;
        }

        if is_convex(&vertices, epsilon) {
            return Some(vertices);
        }

        let reflex: Vec<bool> = (0..vertices.len())
            .map(|i| {
                let turn = corner_turn(&vertices, i);
                turn * winding < 0.0 && turn.abs() > epsilon
            })
            .collect();
        let mut flags = reflex.iter();
        vertices.retain(|_| !flags.next().copied().unwrap_or(false));
    }

    if vertices.len() >= 3 && is_convex(&vertices, epsilon) {
        Some(vertices)
    } else {
        None
    }
}

/// The area-weighted centroid of a closed polygon.
///
/// Falls back to the average of the vertices when the polygon has a zero area.
pub fn polygon_centroid(points: &[Point<Real>]) -> Point<Real> {
    if points.is_empty() {
        return Point::origin();
    }

    let mut area = 0.0;
    let mut acc = Point::origin();

    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let cross = a.x * b.y - b.x * a.y;
        area += cross;
        acc += (a.coords + b.coords) * cross;
    }

    if area == 0.0 {
        let sum = points
            .iter()
            .fold(Point::origin(), |acc, pt| acc + pt.coords);
        return sum / points.len() as Real;
    }

    acc / (3.0 * area)
}
