use approx::assert_relative_eq;
use sidestep3d::bounding_volume::Aabb;
use sidestep3d::field::ObstacleField;
use sidestep3d::na::{Point3, Vector3};
use sidestep3d::query::Ray;

fn cube_field() -> (ObstacleField, sidestep3d::partitioning::ObstacleId) {
    let mut field = ObstacleField::new(Vector3::new(10.0, 10.0, 10.0)).unwrap();
    let id = field
        .add_obstacle(Aabb::from_origin_extents(
            Point3::new(4.0, 4.0, 4.0),
            Vector3::new(2.0, 2.0, 2.0),
        ))
        .unwrap()
        .expect("the obstacle lies within the grid");
    (field, id)
}

#[test]
fn region_overlap_queries() {
    let (field, id) = cube_field();

    assert!(field.intersects(&Aabb::from_origin_extents(
        Point3::new(5.0, 5.0, 5.0),
        Vector3::new(1.0, 1.0, 1.0),
    )));
    assert!(!field.intersects(&Aabb::from_origin_extents(
        Point3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 1.0, 1.0),
    )));

    let reported = field.obstacles_in(&Aabb::from_origin_extents(
        Point3::new(3.0, 3.0, 3.0),
        Vector3::new(4.0, 4.0, 4.0),
    ));
    assert!(reported.contains(&id));
}

#[test]
fn centered_ray_hits_the_face_diagonal_midpoint() {
    let (field, id) = cube_field();

    // Box boundaries are decomposed into face diagonals, so a ray aimed
    // at the center of a face crosses the -x diagonal at its midpoint.
    // With the default 0.25 inflation, that face sits at x = 3.75.
    let ray = Ray::new(Point3::new(0.0, 5.0, 5.0), Vector3::x());
    let hit = field.raycast(&ray, 20.0).expect("the cube lies ahead");

    assert_eq!(hit.obstacle, id);
    assert_relative_eq!(hit.point.x, 3.75, epsilon = 1e-2);
    assert_relative_eq!(hit.point.y, 5.0, epsilon = 1e-2);
    assert_relative_eq!(hit.point.z, 5.0, epsilon = 1e-2);

    let distance = sidestep3d::na::distance(&ray.origin, &hit.point);
    assert_relative_eq!(distance, 3.75, epsilon = 1e-2);

    // The distance bound is strict.
    assert!(field.raycast(&ray, distance).is_none());
    assert!(field.raycast(&ray, 2.0).is_none());
}

#[test]
fn offset_ray_passes_the_cube() {
    let (field, _) = cube_field();

    // Far from every face diagonal: no hit, and line of sight holds.
    let ray = Ray::new(Point3::new(0.0, 1.0, 1.0), Vector3::x());
    assert!(field.raycast(&ray, 20.0).is_none());
    assert!(field.line_of_sight(&Point3::new(0.0, 1.0, 1.0), &Point3::new(9.0, 1.0, 1.0)));
}

#[test]
fn line_of_sight_is_blocked_through_the_center() {
    let (field, _) = cube_field();

    assert!(!field.line_of_sight(&Point3::new(0.0, 5.0, 5.0), &Point3::new(9.0, 5.0, 5.0)));

    // A target in front of the obstacle stays visible.
    assert!(field.line_of_sight(&Point3::new(0.0, 5.0, 5.0), &Point3::new(3.0, 5.0, 5.0)));
}

#[test]
fn diagonal_ray_hits_the_inflated_corner() {
    let (field, id) = cube_field();

    let ray = Ray::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0).normalize());
    let hit = field.raycast(&ray, f32::INFINITY).expect("the cube sits on the diagonal");

    assert_eq!(hit.obstacle, id);
    // The inflated minimum corner lies at 3.75 on every axis.
    assert_relative_eq!(hit.point.x, 3.75, epsilon = 1e-2);
    assert_relative_eq!(hit.point.y, 3.75, epsilon = 1e-2);
    assert_relative_eq!(hit.point.z, 3.75, epsilon = 1e-2);
}
