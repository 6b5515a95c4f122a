use crate::{l_shape, sprite_mapping};
use slicer2d::math::{Point, Real};
use slicer2d::mesh::SpriteFlags;
use slicer2d::shape::CutLine;
use slicer2d::slicing::{InstanceId, SliceParams, SliceSource, Slicer};

fn through_the_foot() -> CutLine {
    CutLine::new(Point::new(-1.0, 0.5), Point::new(3.0, 0.5)).unwrap()
}

#[test]
fn cut_entirely_outside() {
    let outline = l_shape();
    let source = SliceSource::new(InstanceId(1), &outline, sprite_mapping(SpriteFlags::empty()));
    let cut = CutLine::new(Point::new(5.0, -1.0), Point::new(5.0, 3.0)).unwrap();
    assert!(Slicer::default().slice(&source, &cut).unwrap().is_empty());
}

#[test]
fn cut_ending_inside() {
    let outline = l_shape();
    let source = SliceSource::new(InstanceId(1), &outline, sprite_mapping(SpriteFlags::empty()));
    let mut slicer = Slicer::default();

    let cut = CutLine::new(Point::new(-1.0, 0.5), Point::new(0.5, 0.5)).unwrap();
    assert!(slicer.slice(&source, &cut).unwrap().is_empty());

    let cut = CutLine::new(Point::new(1.5, 0.5), Point::new(3.0, 0.5)).unwrap();
    assert!(slicer.slice(&source, &cut).unwrap().is_empty());
}

#[test]
fn depth_limit() {
    let outline = l_shape();
    let mut source =
        SliceSource::new(InstanceId(1), &outline, sprite_mapping(SpriteFlags::empty()));
    source.depth = 2;

    let mut limited = Slicer::new(SliceParams {
        max_depth: Some(2),
        ..SliceParams::default()
    });
    assert!(limited.slice(&source, &through_the_foot()).unwrap().is_empty());

    source.depth = 1;
    let children = limited.slice(&source, &through_the_foot()).unwrap();
    assert_eq!(children.len(), 2);
    assert!(children.iter().all(|c| c.depth == 2));
}

#[test]
fn no_depth_limit() {
    let outline = l_shape();
    let mut source =
        SliceSource::new(InstanceId(1), &outline, sprite_mapping(SpriteFlags::empty()));
    source.depth = 1000;

    let mut slicer = Slicer::new(SliceParams {
        max_depth: None,
        ..SliceParams::default()
    });
    assert_eq!(slicer.slice(&source, &through_the_foot()).unwrap().len(), 2);
}

#[test]
fn degenerate_outlines() {
    let flat = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
    ];
    let source = SliceSource::new(InstanceId(1), &flat, sprite_mapping(SpriteFlags::empty()));
    let cut = CutLine::new(Point::new(0.5, -1.0), Point::new(0.5, 1.0)).unwrap();
    assert!(Slicer::default().slice(&source, &cut).unwrap().is_empty());
}

#[test]
fn self_intersecting_outline() {
    let step = core::f64::consts::TAU as Real / 5.0;
    let star: Vec<_> = [0, 2, 4, 1, 3]
        .iter()
        .map(|i| {
            let (sin, cos) = (*i as Real * step).sin_cos();
            Point::new(sin, cos) * 2.0
        })
        .collect();
    let source = SliceSource::new(InstanceId(1), &star, sprite_mapping(SpriteFlags::empty()));
    let cut = CutLine::new(Point::new(-5.0, 0.2), Point::new(5.0, 0.2)).unwrap();
    assert!(Slicer::default().slice(&source, &cut).unwrap().is_empty());
}
