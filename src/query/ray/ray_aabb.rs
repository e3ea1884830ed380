use std::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};
use crate::query::Ray;
use na;

/// The tolerance used by the segment intersection routines.
///
/// In 2D it is also added to the intersection denominator so that
/// near-parallel configurations stay finite instead of blowing up; this
/// trades a minuscule bias on the reported parameters for robustness.
pub const EPS: Real = 1e-4;

impl Aabb {
    /// Tests whether `ray` intersects this AABB.
    ///
    /// This is the slab test: the ray is clipped against the pair of
    /// axis-aligned halfspaces of every axis. It is exact, and used to
    /// reject whole partition-tree subtrees during a ray cast before any
    /// boundary segment is looked at.
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        let mut tmin: Real = 0.0;
        let mut tmax: Real = Real::INFINITY;

        for i in 0..DIM {
            if ray.dir[i] == 0.0 {
                if ray.origin[i] < self.mins[i] || ray.origin[i] > self.maxs[i] {
                    return false;
                }
            } else {
                let denom = 1.0 / ray.dir[i];
                let mut inter_with_near_halfspace = (self.mins[i] - ray.origin[i]) * denom;
                let mut inter_with_far_halfspace = (self.maxs[i] - ray.origin[i]) * denom;

                if inter_with_near_halfspace > inter_with_far_halfspace {
                    mem::swap(
                        &mut inter_with_near_halfspace,
                        &mut inter_with_far_halfspace,
                    )
                }

                tmin = tmin.max(inter_with_near_halfspace);
                tmax = tmax.min(inter_with_far_halfspace);

                if tmin > tmax {
                    // This covers the case where tmax is negative because tmin is
                    // initialized at zero.
                    return false;
                }
            }
        }

        true
    }

    /// Casts `ray` on the boundary segments of this AABB and returns the
    /// hit closest to the ray origin, if any.
    ///
    /// The boundary is the one given by [`Aabb::boundary_segments`]: the
    /// four edges in 2D, the six face diagonals in 3D. Among the
    /// segments hit, the intersection point with the smallest squared
    /// distance from `ray.origin` wins.
    pub fn cast_boundary_ray(&self, ray: &Ray) -> Option<Point<Real>> {
        let mut closest = None;
        let mut min_dist = Real::INFINITY;

        for [a, b] in self.boundary_segments() {
            if let Some(point) = ray_segment(ray, &a, &b) {
                let dist = na::distance_squared(&ray.origin, &point);
                if dist < min_dist {
                    min_dist = dist;
                    closest = Some(point);
                }
            }
        }

        closest
    }
}

/// Computes the intersection between a forward ray and the segment
/// joining `a` to `b`.
///
/// Solves the two-line parametric system; `ua` is the parameter along
/// the ray, `ub` the fraction along the segment. A hit requires
/// `ua >= 0` (in front of the origin) and `0 <= ub <= 1` (within the
/// segment). Parallel lines (including collinear ones) produce no
/// intersection.
#[cfg(feature = "dim2")]
fn ray_segment(ray: &Ray, a: &Point<Real>, b: &Point<Real>) -> Option<Point<Real>> {
    let det = ray.dir.x * (b.y - a.y) - ray.dir.y * (b.x - a.x);
    if det == 0.0 {
        // Lines are parallel.
        return None;
    }

    let ua = ((b.x - a.x) * (ray.origin.y - a.y) - (b.y - a.y) * (ray.origin.x - a.x)) / (det + EPS);
    let ub = (ray.dir.x * (ray.origin.y - a.y) - ray.dir.y * (ray.origin.x - a.x)) / (det + EPS);

    if ua >= 0.0 && ub >= 0.0 && ub <= 1.0 {
        Some(ray.point_at(ua))
    } else {
        None
    }
}

/// Computes the intersection between a forward ray and the segment
/// joining `a` to `b`.
///
/// Cross/dot formulation of the closest-approach parameters between the
/// ray line and the segment line: with `n = dir × seg`, the determinant
/// is `‖n‖²` (zero iff the lines are parallel) and the parameters come
/// from scalar triple products. Skew pairs are accepted at their closest
/// approach along the ray; no coplanarity check is made. The same
/// `ua`/`ub` acceptance window as the 2D routine applies.
#[cfg(feature = "dim3")]
fn ray_segment(ray: &Ray, a: &Point<Real>, b: &Point<Real>) -> Option<Point<Real>> {
    let seg = b - a;
    let normal = ray.dir.cross(&seg);
    let det = normal.norm_squared();
    if det < EPS {
        // Lines are parallel.
        return None;
    }

    let diff = a - ray.origin;
    let ua = diff.cross(&seg).dot(&normal) / det;
    let ub = diff.cross(&ray.dir).dot(&normal) / det;

    if ua >= 0.0 && ub >= 0.0 && ub <= 1.0 {
        Some(ray.point_at(ua))
    } else {
        None
    }
}
