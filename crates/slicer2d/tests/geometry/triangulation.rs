use approx::assert_relative_eq;
use slicer2d::math::{Point, Real};
use slicer2d::transformation::{signed_area, triangulate_ear_clipping};
use slicer2d::utils::determinant2x3;

fn triangles_area(vertices: &[Point<Real>], triangles: &[[u32; 3]]) -> Real {
    triangles
        .iter()
        .map(|t| {
            determinant2x3(
                &vertices[t[0] as usize],
                &vertices[t[1] as usize],
                &vertices[t[2] as usize],
            ) * 0.5
        })
        .sum()
}

#[test]
fn random_convex_polygons() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..50 {
        let n = rng.rand_range(3..16) as usize;
        let radius = 1.0 + rng.rand_float() as Real * 4.0;
        let vertices: Vec<_> = (0..n)
            .map(|i| {
                let jitter = rng.rand_float() as Real * 0.5;
                let angle = (i as Real + jitter) * std::f64::consts::TAU as Real / n as Real;
                Point::new(angle.cos() * radius, angle.sin() * radius)
            })
            .collect();

        let triangles = triangulate_ear_clipping(&vertices);
        assert_eq!(triangles.len(), n - 2);
        assert_relative_eq!(
            triangles_area(&vertices, &triangles),
            signed_area(&vertices),
            max_relative = 1.0e-4
        );
    }
}

#[test]
fn l_shape_triangulation() {
    let l_shape = [
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(0.0, 2.0),
    ];
    let triangles = triangulate_ear_clipping(&l_shape);

    assert_eq!(triangles.len(), 4);
    assert_relative_eq!(triangles_area(&l_shape, &triangles), 3.0);
    assert!(triangles.iter().all(|t| {
        determinant2x3(
            &l_shape[t[0] as usize],
            &l_shape[t[1] as usize],
            &l_shape[t[2] as usize],
        ) > 0.0
    }));
}
