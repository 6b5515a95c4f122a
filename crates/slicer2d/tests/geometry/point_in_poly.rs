use slicer2d::math::Point;
use slicer2d::shape::{ColliderShape, Polygon};
use slicer2d::utils::point_in_poly2d;

#[test]
fn point_in_u_shape() {
    let u_shape = [
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(3.0, 3.0),
        Point::new(2.0, 3.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 3.0),
        Point::new(0.0, 3.0),
    ];

    assert!(point_in_poly2d(&Point::new(0.5, 2.5), &u_shape));
    assert!(point_in_poly2d(&Point::new(2.5, 2.5), &u_shape));
    assert!(point_in_poly2d(&Point::new(1.5, 0.5), &u_shape));
    assert!(!point_in_poly2d(&Point::new(1.5, 2.0), &u_shape));
    assert!(!point_in_poly2d(&Point::new(4.0, 0.5), &u_shape));
}

#[test]
fn point_in_collider_outlines() {
    let ball = ColliderShape::Ball {
        center: Point::new(2.0, 2.0),
        radius: 1.0,
    }
    .to_polygon()
    .unwrap();

    assert!(ball.contains_point(&Point::new(2.5, 2.5)));
    assert!(!ball.contains_point(&Point::new(2.9, 2.9)));

    let poly = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
    ])
    .unwrap();
    assert!(poly.contains_point(&Point::new(0.2, 0.2)));
    assert!(!poly.contains_point(&Point::new(0.8, 0.8)));
}
