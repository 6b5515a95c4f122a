use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::transformation::vertex_ordering;
use crate::utils;

/// A simple 2D polygon, wound counter-clockwise.
///
/// Two consecutive vertices determine an edge of the polygon, and the last vertex is
/// implicitly connected to the first one. The polygon has at least three vertices and a
/// non-degenerate area. Self-intersections are not checked on construction, see
/// [`Polygon::is_simple`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
}

impl Polygon {
    /// Creates a polygon from an ordered loop of vertices.
    ///
    /// A trailing vertex equal to the first one is dropped and a clockwise loop is reversed.
    /// Returns `None` if fewer than three vertices remain or if the loop has a zero area.
    pub fn new(mut vertices: Vec<Point<Real>>) -> Option<Self> {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            let _ = vertices.pop();
        }

        if vertices.len() < 3 {
            return None;
        }

        let area = vertex_ordering::signed_area(&vertices);

        if area.abs() <= DEFAULT_EPSILON || !area.is_finite() {
            return None;
        }

        if area < 0.0 {
            vertices.reverse();
        }

        Some(Self { vertices })
    }

    /// The vertices of this polygon, in counter-clockwise order.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// Consumes the polygon and returns its vertices.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point<Real>> {
        self.vertices
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`: a valid polygon has at least three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The signed area of this polygon. Always positive.
    pub fn signed_area(&self) -> Real {
        vertex_ordering::signed_area(&self.vertices)
    }

    /// The area of this polygon.
    pub fn area(&self) -> Real {
        self.signed_area().abs()
    }

    /// The axis-aligned bounding box of this polygon.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points_ref(&self.vertices)
    }

    /// Checks if this polygon is convex, ignoring corners flatter than `epsilon`.
    pub fn is_convex(&self, epsilon: Real) -> bool {
        vertex_ordering::is_convex(&self.vertices, epsilon)
    }

    /// Checks if `pt` is strictly inside this polygon.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        utils::point_in_poly2d(pt, &self.vertices)
    }

    /// The area-weighted centroid of this polygon.
    pub fn centroid(&self) -> Point<Real> {
        vertex_ordering::polygon_centroid(&self.vertices)
    }

    /// Checks that no two non-adjacent edges of this polygon cross.
    ///
    /// Crossings closer than `epsilon` (in segment parameter) to an edge endpoint are
    /// ignored, so outlines touching themselves at a vertex are still considered simple.
    pub fn is_simple(&self, epsilon: Real) -> bool {
        let n = self.vertices.len();

        for i in 0..n {
            let (a, b) = (&self.vertices[i], &self.vertices[(i + 1) % n]);

            for j in i + 2..n {
                if i == 0 && j == n - 1 {
                    continue;
                }

                let (c, d) = (&self.vertices[j], &self.vertices[(j + 1) % n]);

                if let Some((s, t)) = utils::segments_intersection2d(a, b, c, d, DEFAULT_EPSILON) {
                    if s > epsilon && s < 1.0 - epsilon && t > epsilon && t < 1.0 - epsilon {
                        return false;
                    }
                }
            }
        }

        true
    }
}
