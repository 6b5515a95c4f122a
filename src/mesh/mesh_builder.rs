use super::{MeshData, SpriteUvMapping};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::transformation::{triangulate_ear_clipping, PolygonClass};

/// How the triangles of a piece are generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Triangulation {
    /// A fan around the first vertex. Only valid for convex outlines.
    Fan,
    /// Ear clipping, for arbitrary simple outlines.
    EarClipping,
}

impl From<PolygonClass> for Triangulation {
    fn from(class: PolygonClass) -> Self {
        match class {
            PolygonClass::Convex => Triangulation::Fan,
            PolygonClass::Concave => Triangulation::EarClipping,
        }
    }
}

impl Triangulation {
    /// Triangulates the counter-clockwise outline `vertices`.
    ///
    /// Triangles are emitted clockwise, the front-face convention of generated meshes.
    pub fn triangulate(self, vertices: &[Point<Real>]) -> Vec<[u32; 3]> {
        match self {
            Triangulation::Fan => (1..vertices.len().saturating_sub(1))
                .map(|i| [0, i as u32 + 1, i as u32])
                .collect(),
            Triangulation::EarClipping => triangulate_ear_clipping(vertices)
                .into_iter()
                .map(|[a, b, c]| [a, c, b])
                .collect(),
        }
    }
}

/// The render mesh and collision outline of one piece.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltMesh {
    /// The render mesh.
    pub mesh: MeshData,
    /// The collision outline, in the same frame as the mesh.
    pub collider: Vec<Point<Real>>,
    /// Where the mesh's frame sits in the frame of the piece it was cut from.
    pub local_offset: Vector<Real>,
    /// Where the mesh's frame sits in the frame of the original sprite.
    pub centroid: Vector<Real>,
}

/// Builds the render mesh of a piece from its outline.
///
/// `vertices` is the counter-clockwise outline in the local frame of the piece being cut,
/// and `mapping` the UV record of that piece. Texture coordinates are computed before any
/// re-centering so each vertex keeps sampling the same texel.
///
/// With `center` set, the mesh and the returned collider are shifted so the mesh bounds
/// are centered on the origin, and the shift is reported as `local_offset`.
pub fn build_mesh(
    vertices: &[Point<Real>],
    mapping: &SpriteUvMapping,
    triangulation: Triangulation,
    center: bool,
) -> BuiltMesh {
    let uvs = vertices.iter().map(|pt| mapping.uv_at(pt)).collect();
    let indices = triangulation.triangulate(vertices);
    let mut mesh = MeshData::new(vertices, uvs, indices);
    let mut collider = vertices.to_vec();

    let local_offset = if center {
        Aabb::from_points_ref(vertices).center().coords
    } else {
        Vector::zeros()
    };

    if center {
        mesh.translate(&-local_offset);

        for pt in &mut collider {
            *pt -= local_offset;
        }
    }

    BuiltMesh {
        mesh,
        collider,
        local_offset,
        centroid: mapping.centroid + local_offset,
    }
}
