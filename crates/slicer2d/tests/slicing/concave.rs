use crate::{l_shape, sprite_mapping, u_shape};
use approx::assert_relative_eq;
use ordered_float::OrderedFloat;
use slicer2d::math::{Point, Real};
use slicer2d::mesh::SpriteFlags;
use slicer2d::shape::CutLine;
use slicer2d::slicing::{InstanceId, SliceSource, Slicer};
use slicer2d::transformation::signed_area;

#[test]
fn l_shape_cut_through_its_foot() {
    let outline = l_shape();
    let source = SliceSource::new(InstanceId(1), &outline, sprite_mapping(SpriteFlags::empty()));
    let mut slicer = Slicer::default();

    for (start, end) in [
        (Point::new(-1.0, 0.5), Point::new(3.0, 0.5)),
        (Point::new(3.0, 0.5), Point::new(-1.0, 0.5)),
    ] {
        let cut = CutLine::new(start, end).unwrap();
        let children = slicer.slice(&source, &cut).unwrap();

        assert_eq!(children.len(), 2);

        let mut areas: Vec<Real> = children.iter().map(|c| c.area).collect();
        areas.sort_by_key(|a| OrderedFloat(*a));
        assert_relative_eq!(areas[0], 1.0, epsilon = 1.0e-5);
        assert_relative_eq!(areas[1], 2.0, epsilon = 1.0e-5);

        for child in &children {
            assert!(signed_area(child.polygon.vertices()) > 0.0);
            assert_eq!(child.mesh.num_triangles(), child.polygon.len() - 2);
            assert_eq!(child.depth, 1);
        }
    }
}

#[test]
fn u_shape_cut_across_both_prongs() {
    let outline = u_shape();
    let source = SliceSource::new(InstanceId(1), &outline, sprite_mapping(SpriteFlags::empty()));
    let cut = CutLine::new(Point::new(-1.0, 2.0), Point::new(4.0, 2.0)).unwrap();
    let children = Slicer::default().slice(&source, &cut).unwrap();

    assert_eq!(children.len(), 3);

    let mut areas: Vec<Real> = children.iter().map(|c| c.area).collect();
    areas.sort_by_key(|a| OrderedFloat(*a));
    assert_relative_eq!(areas[0], 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(areas[1], 1.0, epsilon = 1.0e-5);
    assert_relative_eq!(areas[2], 5.0, epsilon = 1.0e-5);

    let mass: Real = children.iter().map(|c| c.body.mass).sum();
    assert_relative_eq!(mass, 1.0, epsilon = 1.0e-5);
}

#[test]
fn u_shape_cut_through_its_base() {
    let outline = u_shape();
    let source = SliceSource::new(InstanceId(1), &outline, sprite_mapping(SpriteFlags::empty()));
    let cut = CutLine::new(Point::new(-1.0, 0.5), Point::new(4.0, 0.5)).unwrap();
    let children = Slicer::default().slice(&source, &cut).unwrap();

    assert_eq!(children.len(), 2);
    let area: Real = children.iter().map(|c| c.area).sum();
    assert_relative_eq!(area, 7.0, epsilon = 1.0e-5);
}

#[test]
fn cut_through_the_notch_only() {
    // Both ends outside, but the segment never touches the outline.
    let outline = u_shape();
    let source = SliceSource::new(InstanceId(1), &outline, sprite_mapping(SpriteFlags::empty()));
    let cut = CutLine::new(Point::new(1.5, 4.0), Point::new(1.5, 1.5)).unwrap();
    let children = Slicer::default().slice(&source, &cut).unwrap();
    assert!(children.is_empty());
}

/// Slices `outline` along the horizontal line `y`, in both directions, and checks the
/// number of pieces and their total area.
fn check_horizontal_cut(outline: &[Point<Real>], y: Real, num_pieces: usize, area: Real) {
    let source = SliceSource::new(InstanceId(1), outline, sprite_mapping(SpriteFlags::empty()));
    let mut slicer = Slicer::default();

    for (start, end) in [
        (Point::new(-1.0, y), Point::new(7.0, y)),
        (Point::new(7.0, y), Point::new(-1.0, y)),
    ] {
        let cut = CutLine::new(start, end).unwrap();
        let children = slicer.slice(&source, &cut).unwrap();

        assert_eq!(children.len(), num_pieces);
        let total: Real = children.iter().map(|c| c.area).sum();
        assert_relative_eq!(total, area, epsilon = 1.0e-4);
        assert!(children
            .iter()
            .all(|c| signed_area(c.polygon.vertices()) > 0.0));
    }
}

#[test]
fn cut_through_reflex_vertex() {
    // The cut runs through the bottom of the notch: the node there has Left neighbors on
    // both sides.
    let m_shape = [
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 3.0),
        Point::new(2.0, 1.0),
        Point::new(0.0, 3.0),
    ];
    check_horizontal_cut(&m_shape, 1.0, 3, 8.0);
}

#[test]
fn cut_through_two_reflex_vertices() {
    let w_shape = [
        Point::new(0.0, 0.0),
        Point::new(6.0, 0.0),
        Point::new(6.0, 3.0),
        Point::new(4.5, 1.0),
        Point::new(3.0, 3.0),
        Point::new(1.5, 1.0),
        Point::new(0.0, 3.0),
    ];
    check_horizontal_cut(&w_shape, 1.0, 4, 12.0);
}

#[test]
fn cut_along_an_edge() {
    // The notch floor of the U lies on the cut: both of its ends have an On neighbor.
    check_horizontal_cut(&u_shape(), 1.0, 3, 7.0);
}
