//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM, TWO_DIM};
use na;

/// An Axis-Aligned Bounding Box (AABB).
///
/// This is the only obstacle and region shape handled by this crate: a
/// rectangle in 2D, a box in 3D, with edges parallel to the coordinate
/// axes.
///
/// # Structure
///
/// - **mins**: the corner with the smallest coordinates on each axis.
/// - **maxs**: the corner with the largest coordinates on each axis.
/// - **Invariant**: `mins[i] <= maxs[i]` on every axis. Zero extents are
///   allowed (point regions); negative extents are a caller contract
///   violation and are rejected wherever an
///   [`ObstacleField`](crate::field::ObstacleField) is constructed or
///   populated.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// use sidestep2d::bounding_volume::Aabb;
/// use sidestep2d::na::{Point2, Vector2};
///
/// let aabb = Aabb::from_origin_extents(Point2::new(1.0, 2.0), Vector2::new(4.0, 2.0));
/// assert_eq!(aabb.mins, Point2::new(1.0, 2.0));
/// assert_eq!(aabb.maxs, Point2::new(5.0, 4.0));
/// assert_eq!(aabb.center(), Point2::new(3.0, 3.0));
/// # }
/// ```
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with the smallest coordinates on each axis.
    pub mins: Point<Real>,
    /// The point with the largest coordinates on each axis.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its minimum corner and its extents along
    /// each axis.
    #[inline]
    pub fn from_origin_extents(origin: Point<Real>, extents: Vector<Real>) -> Self {
        Self::new(origin, origin + extents)
    }

    /// Creates a new AABB from its center and half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Returns the center point of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Returns the half-extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        let half: Real = 0.5;
        (self.maxs - self.mins) * half
    }

    /// Returns the extents of this AABB (its dimensions along each axis).
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Tests whether this AABB overlaps `other`.
    ///
    /// AABBs that merely touch (share an edge, face, or corner) count as
    /// overlapping.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Tests whether `point` lies inside this AABB (boundary included).
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// Returns this AABB, enlarged by `amount` on every side.
    ///
    /// The center is preserved. This is the inflation applied to
    /// obstacles before ray hit tests, giving moving queries a small
    /// safety buffer against grazing hits.
    #[inline]
    #[must_use]
    pub fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins - Vector::repeat(amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }

    /// Splits this AABB at its center, into four parts (as in a quad-tree).
    #[inline]
    #[cfg(feature = "dim2")]
    pub fn split_at_center(&self) -> [Aabb; 4] {
        let center = self.center();

        [
            Aabb::new(self.mins, center),
            Aabb::new(
                Point::new(center.x, self.mins.y),
                Point::new(self.maxs.x, center.y),
            ),
            Aabb::new(center, self.maxs),
            Aabb::new(
                Point::new(self.mins.x, center.y),
                Point::new(center.x, self.maxs.y),
            ),
        ]
    }

    /// Splits this AABB at its center, into eight parts (as in an octree).
    #[inline]
    #[cfg(feature = "dim3")]
    pub fn split_at_center(&self) -> [Aabb; 8] {
        let center = self.center();

        [
            Aabb::new(
                Point::new(self.mins.x, self.mins.y, self.mins.z),
                Point::new(center.x, center.y, center.z),
            ),
            Aabb::new(
                Point::new(center.x, self.mins.y, self.mins.z),
                Point::new(self.maxs.x, center.y, center.z),
            ),
            Aabb::new(
                Point::new(center.x, center.y, self.mins.z),
                Point::new(self.maxs.x, self.maxs.y, center.z),
            ),
            Aabb::new(
                Point::new(self.mins.x, center.y, self.mins.z),
                Point::new(center.x, self.maxs.y, center.z),
            ),
            Aabb::new(
                Point::new(self.mins.x, self.mins.y, center.z),
                Point::new(center.x, center.y, self.maxs.z),
            ),
            Aabb::new(
                Point::new(center.x, self.mins.y, center.z),
                Point::new(self.maxs.x, center.y, self.maxs.z),
            ),
            Aabb::new(
                Point::new(center.x, center.y, center.z),
                Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            ),
            Aabb::new(
                Point::new(self.mins.x, center.y, center.z),
                Point::new(center.x, self.maxs.y, self.maxs.z),
            ),
        ]
    }

    /// The boundary segments of this AABB, used by segment-based ray
    /// casting.
    ///
    /// Each segment is given as a `[start, end]` pair. In 2D these are
    /// the four edges of the rectangle.
    #[inline]
    #[cfg(feature = "dim2")]
    pub fn boundary_segments(&self) -> [[Point<Real>; 2]; TWO_DIM] {
        [
            // Bottom edge.
            [
                Point::new(self.mins.x, self.mins.y),
                Point::new(self.maxs.x, self.mins.y),
            ],
            // Top edge.
            [
                Point::new(self.mins.x, self.maxs.y),
                Point::new(self.maxs.x, self.maxs.y),
            ],
            // Left edge.
            [
                Point::new(self.mins.x, self.mins.y),
                Point::new(self.mins.x, self.maxs.y),
            ],
            // Right edge.
            [
                Point::new(self.maxs.x, self.mins.y),
                Point::new(self.maxs.x, self.maxs.y),
            ],
        ]
    }

    /// The boundary segments of this AABB, used by segment-based ray
    /// casting.
    ///
    /// Each segment is given as a `[start, end]` pair. In 3D each of the
    /// six faces contributes the diagonal joining its minimum corner to
    /// its maximum corner. Ray casts against a box therefore only report
    /// hits crossing a face diagonal; this coarse boundary decomposition
    /// is intentional.
    #[inline]
    #[cfg(feature = "dim3")]
    pub fn boundary_segments(&self) -> [[Point<Real>; 2]; TWO_DIM] {
        [
            // Near face (-z).
            [
                Point::new(self.mins.x, self.mins.y, self.mins.z),
                Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            ],
            // Far face (+z).
            [
                Point::new(self.mins.x, self.mins.y, self.maxs.z),
                Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            ],
            // Left face (-x).
            [
                Point::new(self.mins.x, self.mins.y, self.mins.z),
                Point::new(self.mins.x, self.maxs.y, self.maxs.z),
            ],
            // Right face (+x).
            [
                Point::new(self.maxs.x, self.mins.y, self.mins.z),
                Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            ],
            // Bottom face (-y).
            [
                Point::new(self.mins.x, self.mins.y, self.mins.z),
                Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            ],
            // Top face (+y).
            [
                Point::new(self.mins.x, self.maxs.y, self.mins.z),
                Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            ],
        ]
    }
}
