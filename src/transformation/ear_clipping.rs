//! Ear-clipping algorithm for creating a triangle mesh from a simple polygon.

use crate::math::{Point, Real};
use crate::transformation::vertex_ordering::signed_area;
use crate::utils::{determinant2x3, is_point_in_triangle};

/// Checks if the corner `(u, v, w)` of the remaining polygon is an ear.
///
/// The corner must turn counter-clockwise and no other remaining vertex may lie inside
/// (or on the boundary of) the triangle it spans.
fn is_ear(points: &[Point<Real>], remaining: &[usize], u: usize, v: usize, w: usize) -> bool {
    let a = &points[remaining[u]];
    let b = &points[remaining[v]];
    let c = &points[remaining[w]];

    if determinant2x3(a, b, c) <= Real::EPSILON {
        return false;
    }

    remaining
        .iter()
        .enumerate()
        .filter(|(p, _)| *p != u && *p != v && *p != w)
        .all(|(_, &i)| is_point_in_triangle(&points[i], a, b, c) == Some(false))
}

/// Ear clipping triangulation algorithm.
///
/// The input may be wound either way; the returned triangles always index `points` in
/// counter-clockwise order. Each pass scans the remaining vertices for an ear, emits it and
/// removes its tip, until three vertices remain which form the last triangle.
///
/// A malformed polygon (self-intersecting, or with overlapping vertices) may have no ear
/// left at some point. Once `2 × remaining` candidates were tried without success, the
/// triangles found so far are returned.
pub fn triangulate_ear_clipping(points: &[Point<Real>]) -> Vec<[u32; 3]> {
    let n_vertices = points.len();
    let mut output_indices = Vec::with_capacity(n_vertices.saturating_sub(2));

    if n_vertices < 3 {
        return output_indices;
    }

    let mut remaining: Vec<usize> = if signed_area(points) > 0.0 {
        (0..n_vertices).collect()
    } else {
        (0..n_vertices).rev().collect()
    };

    let mut attempts_left = 2 * remaining.len();
    let mut v = remaining.len() - 1;

    while remaining.len() > 3 {
        if attempts_left == 0 {
            log::debug!(
                "Ear clipping gave up with {} vertices left, the polygon is probably not simple.",
                remaining.len()
            );
            return output_indices;
        }
        attempts_left -= 1;

        let nv = remaining.len();
        let u = if v >= nv { 0 } else { v };
        v = if u + 1 >= nv { 0 } else { u + 1 };
        let w = if v + 1 >= nv { 0 } else { v + 1 };

        if is_ear(points, &remaining, u, v, w) {
            output_indices.push([
                remaining[u] as u32,
                remaining[v] as u32,
                remaining[w] as u32,
            ]);
            let _ = remaining.remove(v);
            attempts_left = 2 * remaining.len();
        }
    }

    output_indices.push([
        remaining[0] as u32,
        remaining[1] as u32,
        remaining[2] as u32,
    ]);

    output_indices
}
