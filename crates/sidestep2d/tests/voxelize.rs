use sidestep2d::bounding_volume::Aabb;
use sidestep2d::field::ObstacleField;
use sidestep2d::na::{Point2, Vector2};
use sidestep2d::voxelization::Voxelizer;

#[test]
fn empty_field_yields_one_cell() {
    let field = ObstacleField::new(Vector2::new(10.0, 10.0)).unwrap();
    let vox = Voxelizer::new(0.5);

    let cells = vox.voxelize(field.bounds(), &field);
    assert_eq!(cells, vec![*field.bounds()]);
}

#[test]
fn cells_avoid_the_obstacle() {
    let mut field = ObstacleField::new(Vector2::new(16.0, 16.0)).unwrap();
    let _ = field
        .add_obstacle(Aabb::from_origin_extents(
            Point2::new(6.0, 6.0),
            Vector2::new(4.0, 4.0),
        ))
        .unwrap();

    let vox = Voxelizer::new(0.25);
    let cells = vox.voxelize(field.bounds(), &field);

    assert!(!cells.is_empty());

    let mut free_area = 0.0;
    for cell in &cells {
        assert!(!field.intersects(cell));
        assert!(field.bounds().intersects(cell));
        free_area += cell.extents().x * cell.extents().y;
    }

    // The free area can not exceed the grid minus the obstacle, and the
    // dropped sub-minimum fringe keeps it strictly below.
    let grid_area = 16.0 * 16.0;
    let obstacle_area = 4.0 * 4.0;
    assert!(free_area < grid_area - obstacle_area);
    assert!(free_area > 0.8 * (grid_area - obstacle_area));
}

#[test]
fn finer_cells_recover_more_free_space() {
    let mut field = ObstacleField::new(Vector2::new(16.0, 16.0)).unwrap();
    let _ = field
        .add_obstacle(Aabb::from_origin_extents(
            Point2::new(6.0, 6.0),
            Vector2::new(4.0, 4.0),
        ))
        .unwrap();

    let area = |cells: &[Aabb]| -> f32 {
        cells
            .iter()
            .map(|cell| cell.extents().x * cell.extents().y)
            .sum()
    };

    let coarse = area(&Voxelizer::new(2.0).voxelize(field.bounds(), &field));
    let fine = area(&Voxelizer::new(0.125).voxelize(field.bounds(), &field));

    assert!(fine > coarse);
}
