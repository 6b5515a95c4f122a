use crate::{l_shape, sprite_mapping};
use approx::assert_relative_eq;
use slicer2d::math::{Point, Real, Vector};
use slicer2d::mesh::SpriteFlags;
use slicer2d::shape::CutLine;
use slicer2d::slicing::{
    BodyParams, InstanceId, SliceEvent, SliceFilter, SliceParams, SliceSource, Slicer,
};

fn square(center: Point<Real>) -> Vec<Point<Real>> {
    [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]]
        .iter()
        .map(|[x, y]| center + Vector::new(*x, *y))
        .collect()
}

#[test]
fn listener_is_notified_once_per_sliced_source() {
    let outline = square(Point::origin());
    let source = SliceSource::new(InstanceId(7), &outline, sprite_mapping(SpriteFlags::empty()));
    let cut = CutLine::new(Point::new(-2.0, 0.0), Point::new(2.0, 0.0)).unwrap();
    let mut events = vec![];

    let children = Slicer::default()
        .slice_with_listener(&source, &cut, None, &mut |event: &SliceEvent<'_>| {
            events.push((event.source_id, event.children.len(), event.enter, event.exit))
        })
        .unwrap();

    assert_eq!(children.len(), 2);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, InstanceId(7));
    assert_eq!(events[0].1, 2);
    assert_relative_eq!(events[0].2, Point::new(-1.0, 0.0), epsilon = 1.0e-5);
    assert_relative_eq!(events[0].3, Point::new(1.0, 0.0), epsilon = 1.0e-5);

    // Nothing is sent when the cut misses.
    let miss = CutLine::new(Point::new(-2.0, 5.0), Point::new(2.0, 5.0)).unwrap();
    let mut count = 0;
    let _ = Slicer::default()
        .slice_with_listener(&source, &miss, None, &mut |_: &SliceEvent<'_>| count += 1)
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn centered_pieces_can_be_sliced_again() {
    let outline = l_shape();
    let source = SliceSource::new(InstanceId(1), &outline, sprite_mapping(SpriteFlags::empty()))
        .with_body(BodyParams {
            mass: 6.0,
            ..BodyParams::default()
        });
    let mut slicer = Slicer::new(SliceParams {
        center_children: true,
        ..SliceParams::default()
    });

    let cut = CutLine::new(Point::new(-1.0, 0.5), Point::new(3.0, 0.5)).unwrap();
    let children = slicer.slice(&source, &cut).unwrap();
    assert_eq!(children.len(), 2);

    for child in &children {
        // Every piece is centered on its own bounds.
        assert_relative_eq!(child.mesh.bounds.center(), Point::origin(), epsilon = 1.0e-5);
        assert_relative_eq!(child.polygon.aabb().center(), Point::origin(), epsilon = 1.0e-5);
        assert_eq!(child.mapping.centroid, child.local_offset);

        // The stored mapping reproduces the texture coordinates of the mesh.
        for (vertex, uv) in child.mesh.vertices.iter().zip(&child.mesh.uvs) {
            assert_relative_eq!(child.mapping.uv_at(&vertex.xy()), *uv, epsilon = 1.0e-5);
        }
    }

    let big = children
        .iter()
        .find(|c| c.area > 1.5)
        .unwrap();
    let big_source = big.as_source(InstanceId(2));
    assert_eq!(big_source.root_id, InstanceId(1));
    assert_eq!(big_source.depth, 1);

    // The big piece spans y in [0.5, 2], centered at 1.25: cut it at y = 1.5 in the
    // original frame.
    let offset = big.local_offset;
    let cut = CutLine::new(
        Point::new(-1.0, 1.5) - offset,
        Point::new(3.0, 1.5) - offset,
    )
    .unwrap();
    let grandchildren = slicer.slice(&big_source, &cut).unwrap();

    assert_eq!(grandchildren.len(), 2);
    let area: Real = grandchildren.iter().map(|c| c.area).sum();
    let mass: Real = grandchildren.iter().map(|c| c.body.mass).sum();
    assert_relative_eq!(area, big.area, epsilon = 1.0e-4);
    assert_relative_eq!(mass, big.body.mass, epsilon = 1.0e-4);

    for grandchild in &grandchildren {
        assert_eq!(grandchild.depth, 2);
        assert_eq!(grandchild.source_id, InstanceId(2));
        assert_eq!(grandchild.root_id, InstanceId(1));
        assert_relative_eq!(
            grandchild.mapping.centroid,
            big.mapping.centroid + grandchild.local_offset,
            epsilon = 1.0e-5
        );

        // Texture coordinates stay those of the original sprite.
        for (vertex, uv) in grandchild.mesh.vertices.iter().zip(&grandchild.mesh.uvs) {
            let original = vertex.xy() + grandchild.mapping.centroid;
            assert_relative_eq!(source.mapping.uv_at(&original), *uv, epsilon = 1.0e-5);
        }
    }
}

#[test]
fn slice_all_honors_the_filter() {
    let fruit = square(Point::new(0.0, 0.0));
    let bomb = square(Point::new(3.0, 0.0));
    let wall = square(Point::new(6.0, 0.0));
    let mapping = sprite_mapping(SpriteFlags::empty());

    let sources = [
        SliceSource::new(InstanceId(1), &fruit, mapping).with_tag("fruit"),
        SliceSource::new(InstanceId(2), &bomb, mapping).with_tag("bomb"),
        SliceSource::new(InstanceId(3), &wall, mapping)
            .with_tag("fruit")
            .with_body(BodyParams {
                is_static: true,
                ..BodyParams::default()
            }),
    ];
    let cut = CutLine::new(Point::new(-2.0, 0.0), Point::new(8.0, 0.0)).unwrap();
    let mut slicer = Slicer::default();

    let all = slicer.slice_all(&sources, &cut, &SliceFilter::default(), &mut ());
    assert_eq!(all.len(), 4);

    let mut sliced = vec![];
    let fruits = slicer.slice_all(
        &sources,
        &cut,
        &SliceFilter::tag("fruit"),
        &mut |event: &SliceEvent<'_>| sliced.push(event.source_id),
    );
    assert_eq!(fruits.len(), 2);
    assert!(fruits.iter().all(|c| c.source_id == InstanceId(1)));
    assert!(fruits.iter().all(|c| c.tag.as_deref() == Some("fruit")));
    assert_eq!(sliced, vec![InstanceId(1)]);

    let bombs = slicer.slice_all(&sources, &cut, &SliceFilter::instance(InstanceId(2)), &mut ());
    assert_eq!(bombs.len(), 2);
    assert!(bombs.iter().all(|c| c.root_id == InstanceId(2)));
}

#[test]
fn instance_filter_accepts_derived_pieces() {
    let outline = square(Point::origin());
    let source = SliceSource::new(InstanceId(1), &outline, sprite_mapping(SpriteFlags::empty()));
    let cut = CutLine::new(Point::new(-2.0, 0.0), Point::new(2.0, 0.0)).unwrap();
    let mut slicer = Slicer::default();
    let children = slicer.slice(&source, &cut).unwrap();

    let pieces: Vec<_> = children
        .iter()
        .enumerate()
        .map(|(i, c)| c.as_source(InstanceId(10 + i as u64)))
        .collect();
    let filter = SliceFilter::instance(InstanceId(1));
    assert!(pieces.iter().all(|p| filter.accepts(p)));
    assert!(!SliceFilter::instance(InstanceId(99)).accepts(&pieces[0]));
}
