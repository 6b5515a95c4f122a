use slicer2d::bounding_volume::Aabb;
use slicer2d::math::{Point, Real, Vector};
use slicer2d::mesh::{SpriteFlags, SpriteUvMapping};

mod concave;
mod lineage;
mod rejection;

/// A sprite covering `[-2, 2]²`, drawn from the whole texture.
pub fn sprite_mapping(flags: SpriteFlags) -> SpriteUvMapping {
    SpriteUvMapping::from_atlas_uvs(
        &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        Aabb::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0)),
        flags,
        Vector::zeros(),
    )
    .unwrap()
}

pub fn l_shape() -> Vec<Point<Real>> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(0.0, 2.0),
    ]
}

pub fn u_shape() -> Vec<Point<Real>> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(3.0, 3.0),
        Point::new(2.0, 3.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 3.0),
        Point::new(0.0, 3.0),
    ]
}
