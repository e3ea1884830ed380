//! A bounded field of axis-aligned obstacles.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::partitioning::{ObstacleId, PartitionTree, RayHit, TreeConfig};
use crate::query::{Ray, EPS};
use na;

/// Error produced when an obstacle field is given degenerate geometry.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ObstacleError {
    /// The extents of the grid, or of an obstacle, have a negative or
    /// non-finite component.
    #[error("extents must be finite and non-negative, got {0:?}")]
    InvalidExtents(Vector<Real>),
}

/// A fixed-size grid of axis-aligned obstacles, indexed by a partition
/// tree.
///
/// The field owns one [`PartitionTree`] whose bounds span the origin to
/// the configured extents; the grid cannot be resized after
/// construction. All spatial questions (region overlap, nearest ray
/// hit, line of sight) are answered by the tree.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// use sidestep2d::bounding_volume::Aabb;
/// use sidestep2d::field::ObstacleField;
/// use sidestep2d::na::{Point2, Vector2};
///
/// let mut field = ObstacleField::new(Vector2::new(10.0, 10.0)).unwrap();
/// let _ = field
///     .add_obstacle(Aabb::from_origin_extents(Point2::new(4.0, 4.0), Vector2::new(2.0, 2.0)))
///     .unwrap();
///
/// assert!(field.intersects(&Aabb::from_origin_extents(
///     Point2::new(5.0, 5.0),
///     Vector2::new(1.0, 1.0),
/// )));
/// assert!(!field.line_of_sight(&Point2::new(0.0, 5.0), &Point2::new(9.0, 5.0)));
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ObstacleField {
    obstacles: PartitionTree,
}

impl ObstacleField {
    /// Creates an obstacle-free field spanning the origin to `extents`,
    /// with the default tree configuration.
    pub fn new(extents: Vector<Real>) -> Result<Self, ObstacleError> {
        Self::with_config(extents, TreeConfig::default())
    }

    /// Creates an obstacle-free field spanning the origin to `extents`.
    pub fn with_config(extents: Vector<Real>, config: TreeConfig) -> Result<Self, ObstacleError> {
        check_extents(&extents)?;
        let bounds = Aabb::from_origin_extents(Point::origin(), extents);
        Ok(ObstacleField {
            obstacles: PartitionTree::with_config(bounds, config),
        })
    }

    /// The region covered by this field.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        self.obstacles.bounds()
    }

    /// The number of registered obstacles.
    #[inline]
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether this field holds no obstacle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Registers an obstacle.
    ///
    /// Returns `Ok(None)` without storing anything if the obstacle lies
    /// entirely outside the grid. Obstacles with negative or non-finite
    /// extents are rejected.
    pub fn add_obstacle(&mut self, obstacle: Aabb) -> Result<Option<ObstacleId>, ObstacleError> {
        check_extents(&obstacle.extents())?;
        Ok(self.obstacles.insert(obstacle))
    }

    /// Tests whether `region` overlaps any registered obstacle.
    #[inline]
    pub fn intersects(&self, region: &Aabb) -> bool {
        self.obstacles.intersect(region)
    }

    /// Casts a ray against the registered obstacles and returns the
    /// closest hit within `max_distance`, if any.
    #[inline]
    pub fn raycast(&self, ray: &Ray, max_distance: Real) -> Option<RayHit> {
        self.obstacles.raycast(ray, max_distance)
    }

    /// The ids of every obstacle overlapping `region`.
    ///
    /// An obstacle recorded in several tree cells may be reported more
    /// than once; deduplicate by id if unique results are needed.
    #[inline]
    pub fn obstacles_in(&self, region: &Aabb) -> Vec<ObstacleId> {
        self.obstacles.query(region)
    }

    /// The ids of every obstacle at `point` (a point-sized query
    /// region).
    pub fn obstacles_at(&self, point: &Point<Real>) -> Vec<ObstacleId> {
        let probe = Aabb::from_origin_extents(*point, Vector::repeat(EPS));
        self.obstacles.query(&probe)
    }

    /// Iterates over every registered obstacle, each exactly once, with
    /// its id.
    pub fn obstacles(&self) -> impl Iterator<Item = (ObstacleId, &Aabb)> {
        self.obstacles.shapes()
    }

    /// The obstacle registered under `id`, if any.
    #[inline]
    pub fn get(&self, id: ObstacleId) -> Option<&Aabb> {
        self.obstacles.get(id)
    }

    /// Removes every registered obstacle.
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Tests whether `a` and `b` see each other without an obstacle in
    /// between.
    ///
    /// The test casts a ray from `a` towards `b`, bounded by their
    /// distance, so an obstacle at or beyond `b` does not block the
    /// sight line. Coincident points always see each other. Note that
    /// obstacles are inflated by the tree's raycast margin, so a sight
    /// line grazing an obstacle edge is reported blocked.
    pub fn line_of_sight(&self, a: &Point<Real>, b: &Point<Real>) -> bool {
        let Some(dir) = (b - a).try_normalize(0.0) else {
            return true;
        };
        self.raycast(&Ray::new(*a, dir), na::distance(a, b)).is_none()
    }
}

fn check_extents(extents: &Vector<Real>) -> Result<(), ObstacleError> {
    for i in 0..DIM {
        if !extents[i].is_finite() || extents[i] < 0.0 {
            return Err(ObstacleError::InvalidExtents(*extents));
        }
    }

    Ok(())
}
