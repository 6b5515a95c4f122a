use crate::bounding_volume::Aabb;
use crate::math::{Point, Point3, Real, Vector, Vector3};

/// The color given to every vertex of a generated mesh.
pub const VERTEX_COLOR: [Real; 4] = [1.0, 1.0, 1.0, 1.0];

/// Renderable geometry of one sliced piece.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MeshData {
    /// The vertex positions, all with `z = 0`.
    pub vertices: Vec<Point3<Real>>,
    /// One texture coordinate per vertex.
    pub uvs: Vec<Point<Real>>,
    /// The triangles, as indices into `vertices`.
    pub indices: Vec<[u32; 3]>,
    /// One color per vertex.
    pub colors: Vec<[Real; 4]>,
    /// One normal per vertex.
    pub normals: Vec<Vector3<Real>>,
    /// The bounds of the vertices on the `xy` plane.
    pub bounds: Aabb,
}

impl MeshData {
    /// Builds a mesh from planar vertices, their texture coordinates, and triangles.
    ///
    /// Colors, normals and bounds are computed.
    pub fn new(vertices: &[Point<Real>], uvs: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Self {
        let mut result = Self {
            vertices: vertices.iter().map(|pt| Point3::new(pt.x, pt.y, 0.0)).collect(),
            uvs,
            indices,
            colors: vec![VERTEX_COLOR; vertices.len()],
            normals: vec![],
            bounds: Aabb::new_invalid(),
        };
        result.recompute_normals();
        result.recompute_bounds();
        result
    }

    /// The number of triangles of this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Recomputes `bounds` from the vertex positions.
    pub fn recompute_bounds(&mut self) {
        self.bounds = Aabb::from_points(self.vertices.iter().map(|pt| pt.xy()));
    }

    /// Recomputes the per-vertex normals, averaging the normals of adjacent triangles.
    ///
    /// Vertices not referenced by any triangle get a zero normal.
    pub fn recompute_normals(&mut self) {
        self.normals = vec![Vector3::zeros(); self.vertices.len()];

        for idx in &self.indices {
            let a = self.vertices[idx[0] as usize];
            let b = self.vertices[idx[1] as usize];
            let c = self.vertices[idx[2] as usize];
            let normal = (b - a).cross(&(c - a));

            for i in idx {
                self.normals[*i as usize] += normal;
            }
        }

        for normal in &mut self.normals {
            if let Some(unit) = normal.try_normalize(Real::EPSILON) {
                *normal = unit;
            }
        }
    }

    /// Moves every vertex by `shift`, updating the bounds.
    pub fn translate(&mut self, shift: &Vector<Real>) {
        for pt in &mut self.vertices {
            pt.x += shift.x;
            pt.y += shift.y;
        }
        self.bounds = self.bounds.translated(shift);
    }
}
