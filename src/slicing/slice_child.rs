use crate::math::{Point, Real, Vector};
use crate::mesh::{MeshData, SpriteUvMapping};
use crate::shape::Polygon;

/// Identifies a sliceable object.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

/// Rigid-body settings handed down from a source to its pieces.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyParams {
    /// The mass of the body.
    pub mass: Real,
    /// Linear velocity damping.
    pub linear_damping: Real,
    /// Angular velocity damping.
    pub angular_damping: Real,
    /// Multiplier of the gravity applied to the body.
    pub gravity_scale: Real,
    /// Whether the body's rotation is locked.
    pub fixed_rotation: bool,
    /// Whether the body is moved by the user instead of the simulation.
    pub kinematic: bool,
    /// Static bodies are never sliced by [`Slicer::slice_all`](super::Slicer::slice_all).
    pub is_static: bool,
    /// The linear velocity of the body.
    pub linear_velocity: Vector<Real>,
    /// The angular velocity of the body.
    pub angular_velocity: Real,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            mass: 1.0,
            linear_damping: 0.0,
            angular_damping: 0.05,
            gravity_scale: 1.0,
            fixed_rotation: false,
            kinematic: false,
            is_static: false,
            linear_velocity: Vector::zeros(),
            angular_velocity: 0.0,
        }
    }
}

impl BodyParams {
    /// A copy of these settings with the mass multiplied by `area_ratio`.
    pub fn scaled(&self, area_ratio: Real) -> Self {
        Self {
            mass: self.mass * area_ratio,
            ..*self
        }
    }
}

/// An object that can be sliced.
#[derive(Clone, Debug, PartialEq)]
pub struct SliceSource<'a> {
    /// The object itself.
    pub id: InstanceId,
    /// The uncut object this one was sliced out of, or `id` itself.
    pub root_id: InstanceId,
    /// The collision outline, in the object's local frame.
    pub outline: &'a [Point<Real>],
    /// How the object's outline maps to its texture.
    pub mapping: SpriteUvMapping,
    /// The object's rigid-body settings.
    pub body: BodyParams,
    /// How many cuts produced this object. Zero for an uncut sprite.
    pub depth: u32,
    /// A user tag, for filtering.
    pub tag: Option<&'a str>,
}

impl<'a> SliceSource<'a> {
    /// A fresh, uncut source.
    pub fn new(id: InstanceId, outline: &'a [Point<Real>], mapping: SpriteUvMapping) -> Self {
        Self {
            id,
            root_id: id,
            outline,
            mapping,
            body: BodyParams::default(),
            depth: 0,
            tag: None,
        }
    }

    /// Sets the rigid-body settings.
    pub fn with_body(mut self, body: BodyParams) -> Self {
        self.body = body;
        self
    }

    /// Sets the tag.
    pub fn with_tag(mut self, tag: &'a str) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// One piece produced by a slice.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SliceChild {
    /// The collision outline of the piece, in its own local frame.
    pub polygon: Polygon,
    /// The area of the piece.
    pub area: Real,
    /// The UV record of the piece.
    pub mapping: SpriteUvMapping,
    /// How many cuts produced this piece.
    pub depth: u32,
    /// The render mesh of the piece, in its own local frame.
    pub mesh: MeshData,
    /// The piece's rigid-body settings.
    pub body: BodyParams,
    /// The object the piece was cut from.
    pub source_id: InstanceId,
    /// The uncut object at the origin of the lineage.
    pub root_id: InstanceId,
    /// Where the piece's local frame sits in the frame of `source_id`.
    pub local_offset: Vector<Real>,
    /// The tag inherited from the source.
    pub tag: Option<String>,
}

impl SliceChild {
    /// Describes this piece as a source for a further slice, under the new identifier `id`.
    pub fn as_source(&self, id: InstanceId) -> SliceSource<'_> {
        SliceSource {
            id,
            root_id: self.root_id,
            outline: self.polygon.vertices(),
            mapping: self.mapping,
            body: self.body,
            depth: self.depth,
            tag: self.tag.as_deref(),
        }
    }
}
