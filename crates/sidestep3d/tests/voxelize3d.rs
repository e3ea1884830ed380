use sidestep3d::bounding_volume::Aabb;
use sidestep3d::field::ObstacleField;
use sidestep3d::na::{Point3, Vector3};
use sidestep3d::pathing::simplify_path;
use sidestep3d::voxelization::Voxelizer;

#[test]
fn empty_field_yields_one_cell() {
    let field = ObstacleField::new(Vector3::new(8.0, 8.0, 8.0)).unwrap();
    let cells = Voxelizer::new(0.5).voxelize(field.bounds(), &field);
    assert_eq!(cells, vec![*field.bounds()]);
}

#[test]
fn octants_are_carved_around_the_obstacle() {
    let mut field = ObstacleField::new(Vector3::new(16.0, 16.0, 16.0)).unwrap();
    let _ = field
        .add_obstacle(Aabb::from_origin_extents(
            Point3::new(6.0, 6.0, 6.0),
            Vector3::new(4.0, 4.0, 4.0),
        ))
        .unwrap();

    let cells = Voxelizer::new(0.5).voxelize(field.bounds(), &field);

    assert!(!cells.is_empty());

    let mut free_volume = 0.0;
    for cell in &cells {
        assert!(!field.intersects(cell));
        free_volume += cell.extents().iter().product::<f32>();
    }

    let grid_volume = 16.0 * 16.0 * 16.0;
    let obstacle_volume = 4.0 * 4.0 * 4.0;
    assert!(free_volume < grid_volume - obstacle_volume);
    assert!(free_volume > 0.8 * (grid_volume - obstacle_volume));
}

#[test]
fn path_simplification_works_over_a_3d_field() {
    let field = ObstacleField::new(Vector3::new(10.0, 10.0, 10.0)).unwrap();

    let path = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 1.0),
        Point3::new(4.0, 0.0, 2.0),
        Point3::new(4.0, 4.0, 4.0),
    ];

    let simplified = simplify_path(&path, |a, b| field.line_of_sight(a, b));
    assert_eq!(simplified, vec![path[0], path[3]]);
}
