use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// How a sprite's image is laid out in its texture.
pub struct SpriteFlags(u8);

bitflags::bitflags! {
    impl SpriteFlags: u8 {
        /// The image is stored rotated by 90 degrees in the atlas.
        const ROTATED = 1;
        /// The image is mirrored horizontally.
        const FLIP_H = 1 << 1;
        /// The image is mirrored vertically.
        const FLIP_V = 1 << 2;
    }
}

/// Draw ordering of a sprite, copied as-is to its pieces.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct RenderSortKey {
    /// The sorting layer.
    pub layer: i32,
    /// The order within the layer.
    pub order: i32,
}

/// Everything needed to map a point of a sprite outline back to its texture.
///
/// A sprite is described once, through [`SpriteUvMapping::from_texture_rect`] or
/// [`SpriteUvMapping::from_atlas_uvs`]. Every piece sliced out of it carries a copy of the
/// same record, with an updated `centroid`, so that pieces of pieces keep sampling the
/// right part of the image.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteUvMapping {
    /// The texture coordinates of the image's bottom-left corner.
    pub uv_min: Point<Real>,
    /// The texture coordinates of the image's top-right corner.
    pub uv_max: Point<Real>,
    /// Rotation and mirroring of the image.
    pub flags: SpriteFlags,
    /// The bounds of the original, uncut sprite in its local frame.
    pub bounds: Aabb,
    /// The pivot of the original sprite, as a fraction of its size, relative to its center.
    pub pivot_offset: Vector<Real>,
    /// Offset of the current piece's local frame from the original sprite's frame.
    pub centroid: Vector<Real>,
    /// Draw ordering.
    pub sort_key: RenderSortKey,
    /// Opaque handle of the material used to draw the sprite.
    pub material: Option<u64>,
}

impl SpriteUvMapping {
    /// Describes a sprite drawn from the pixel rectangle `[rect_min, rect_max]` of a texture
    /// of size `texture_size`.
    pub fn from_texture_rect(
        rect_min: Point<Real>,
        rect_max: Point<Real>,
        texture_size: Vector<Real>,
        bounds: Aabb,
        pivot_offset: Vector<Real>,
    ) -> Self {
        let inv_size = Vector::new(1.0 / texture_size.x, 1.0 / texture_size.y);
        Self {
            uv_min: rect_min.coords.component_mul(&inv_size).into(),
            uv_max: rect_max.coords.component_mul(&inv_size).into(),
            flags: SpriteFlags::empty(),
            bounds,
            pivot_offset,
            centroid: Vector::zeros(),
            sort_key: RenderSortKey::default(),
            material: None,
        }
    }

    /// Describes a sprite from the texture coordinates of its atlas quad.
    ///
    /// The first and last coordinates of `uvs` are taken as the opposite corners of the image.
    /// Returns `None` if `uvs` is empty.
    pub fn from_atlas_uvs(
        uvs: &[Point<Real>],
        bounds: Aabb,
        flags: SpriteFlags,
        pivot_offset: Vector<Real>,
    ) -> Option<Self> {
        Some(Self {
            uv_min: *uvs.first()?,
            uv_max: *uvs.last()?,
            flags,
            bounds,
            pivot_offset,
            centroid: Vector::zeros(),
            sort_key: RenderSortKey::default(),
            material: None,
        })
    }

    /// Sets the draw ordering.
    pub fn with_sort_key(mut self, sort_key: RenderSortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Sets the material handle.
    pub fn with_material(mut self, material: u64) -> Self {
        self.material = Some(material);
        self
    }

    /// The pivot offset of a sprite placed at `position`, covering `world_bounds`.
    ///
    /// The result is the pivot position as a fraction of the bounds' size, relative to their
    /// center. On an axis with a negative `scale` the bounds are measured from their max.
    pub fn pivot_offset(
        position: &Point<Real>,
        world_bounds: &Aabb,
        scale: &Vector<Real>,
    ) -> Vector<Real> {
        let size = world_bounds.extents();
        let mut offset = Vector::zeros();

        for i in 0..2 {
            let from_min = if scale[i] < 0.0 {
                world_bounds.maxs[i] - position[i]
            } else {
                position[i] - world_bounds.mins[i]
            };
            offset[i] = if size[i] != 0.0 { from_min / size[i] } else { 0.5 };
        }

        offset - Vector::repeat(0.5)
    }

    /// The texture coordinates of a point given in the local frame of the current piece.
    pub fn uv_at(&self, local_pt: &Point<Real>) -> Point<Real> {
        let pt = local_pt + self.centroid;
        let size = self.bounds.extents();
        let mut fraction = Vector::repeat(0.5) + self.pivot_offset;

        for i in 0..2 {
            if size[i] != 0.0 {
                fraction[i] += pt[i] / size[i];
            }
        }

        if self.flags.contains(SpriteFlags::FLIP_H) {
            fraction.x = 1.0 - fraction.x;
        }

        if self.flags.contains(SpriteFlags::FLIP_V) {
            fraction.y = 1.0 - fraction.y;
        }

        let uv_size = self.uv_max - self.uv_min;

        if self.flags.contains(SpriteFlags::ROTATED) {
            Point::new(
                self.uv_min.x + uv_size.x * fraction.y,
                self.uv_max.y - uv_size.y * (1.0 - fraction.x),
            )
        } else {
            self.uv_min + uv_size.component_mul(&fraction)
        }
    }
}
