use crate::math::{Point, Real};

/// Computes the intersection point of the two infinite lines `(ps1, pe1)` and `(ps2, pe2)`.
///
/// Returns `None` if the lines are parallel (or one of them is degenerate).
pub fn line_intersection2d(
    ps1: &Point<Real>,
    pe1: &Point<Real>,
    ps2: &Point<Real>,
    pe2: &Point<Real>,
) -> Option<Point<Real>> {
    let a1 = pe1.y - ps1.y;
    let b1 = ps1.x - pe1.x;
    let c1 = a1 * ps1.x + b1 * ps1.y;
    let a2 = pe2.y - ps2.y;
    let b2 = ps2.x - pe2.x;
    let c2 = a2 * ps2.x + b2 * ps2.y;
    let delta = a1 * b2 - a2 * b1;

    if delta == 0.0 || ulps_eq!(delta, 0.0) || !delta.is_finite() {
        return None;
    }

    let inv_delta = 1.0 / delta;
    Some(Point::new(
        (b2 * c1 - b1 * c2) * inv_delta,
        (a1 * c2 - a2 * c1) * inv_delta,
    ))
}

/// Computes the intersection between the segments `[a, b]` and `[c, d]`.
///
/// Returns the barycentric parameters `(s, t)` of the intersection point, such that the
/// point equals `a + (b - a) * s` and `c + (d - c) * t`, with both parameters in `[0, 1]`.
/// Parallel and collinear segments are reported as not intersecting.
pub fn segments_intersection2d(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    epsilon: Real,
) -> Option<(Real, Real)> {
    let denom = a.x * (d.y - c.y) + b.x * (c.y - d.y) + d.x * (b.y - a.y) + c.x * (a.y - b.y);

    // If denom is zero, then segments are parallel.
    if denom.abs() < epsilon || ulps_eq!(denom, 0.0) {
        return None;
    }

    let num = a.x * (d.y - c.y) + c.x * (a.y - d.y) + d.x * (c.y - a.y);
    let s = num / denom;

    let num = -(a.x * (c.y - b.y) + b.x * (a.y - c.y) + c.x * (b.y - a.y));
    let t = num / denom;

    if 0.0 > s || s > 1.0 || 0.0 > t || t > 1.0 {
        None
    } else {
        Some((s, t))
    }
}
