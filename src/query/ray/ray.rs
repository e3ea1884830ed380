//! Structure needed to cast rays.

use crate::math::{Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and
/// extending in a direction. The direction does not need to be
/// normalized for the intersection routines of this crate, but distance
/// bounds (and therefore line-of-sight checks) are only meaningful when
/// it is: [`ObstacleField::line_of_sight`](crate::field::ObstacleField::line_of_sight)
/// normalizes before casting.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// use sidestep2d::query::Ray;
/// use sidestep2d::na::{Point2, Vector2};
///
/// let ray = Ray::new(Point2::new(0.0, 5.0), Vector2::x());
/// assert_eq!(ray.point_at(3.0), Point2::new(3.0, 5.0));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and a direction vector.
    #[inline]
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Computes the point along the ray at parameter `t`, i.e.
    /// `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}
