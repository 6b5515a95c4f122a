use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Polygon;

/// The number of outline vertices generated for a [`ColliderShape::Ball`].
pub const DEFAULT_BALL_SUBDIVISIONS: u32 = 32;

/// The collision outline of a sliceable body, in the body's local frame.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum ColliderShape {
    /// An arbitrary closed outline.
    Polygon(Vec<Point<Real>>),
    /// An axis-aligned box.
    Cuboid {
        /// The center of the box.
        center: Point<Real>,
        /// Half the width and height of the box.
        half_extents: Vector<Real>,
    },
    /// A disk.
    Ball {
        /// The center of the disk.
        center: Point<Real>,
        /// The radius of the disk.
        radius: Real,
    },
}

impl ColliderShape {
    /// Converts this collider into a polygon, with [`DEFAULT_BALL_SUBDIVISIONS`] for disks.
    ///
    /// Returns `None` if the resulting outline is degenerate.
    pub fn to_polygon(&self) -> Option<Polygon> {
        self.to_polygon_with_subdivisions(DEFAULT_BALL_SUBDIVISIONS)
    }

    /// Converts this collider into a polygon, approximating disks with `subdivs` vertices.
    pub fn to_polygon_with_subdivisions(&self, subdivs: u32) -> Option<Polygon> {
        match self {
            ColliderShape::Polygon(vertices) => Polygon::new(vertices.clone()),
            ColliderShape::Cuboid {
                center,
                half_extents,
            } => {
                let aabb = Aabb::from_half_extents(*center, *half_extents);
                Polygon::new(aabb.vertices().to_vec())
            }
            ColliderShape::Ball { center, radius } => {
                let step = core::f64::consts::TAU as Real / subdivs as Real;
                let vertices = (0..subdivs)
                    .map(|i| {
                        let (sin, cos) = (i as Real * step).sin_cos();
                        center + Vector::new(sin, cos) * *radius
                    })
                    .collect();
                Polygon::new(vertices)
            }
        }
    }
}
