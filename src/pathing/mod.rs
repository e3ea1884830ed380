//! Any-angle path simplification.
//!
//! Given an ordered sequence of waypoints and a line-of-sight
//! predicate, these routines drop every waypoint that can be skipped
//! without losing visibility between the remaining consecutive pairs.
//! The predicate is typically backed by
//! [`ObstacleField::line_of_sight`](crate::field::ObstacleField::line_of_sight).

use crate::math::{Point, Real};

/// Simplifies `path` to a subsequence of waypoints preserving pairwise
/// line of sight.
///
/// Paths of two points or fewer are returned unchanged. Otherwise the
/// first point is kept and, from each kept point, a binary search over
/// the remaining suffix finds the furthest waypoint the predicate
/// reports visible; intermediate waypoints are dropped. When nothing in
/// the suffix is visible, the immediate successor is kept so the walk
/// always makes progress.
///
/// The binary search assumes visibility is locally monotonic along the
/// path: if waypoint `j` is visible from the current point, the points
/// between are treated as skippable without being checked individually.
/// An arbitrary obstacle layout can violate that assumption, in which
/// case the result is still a valid visibility-preserving path, just
/// not necessarily the one with the fewest waypoints. This
/// approximation buys `O(log n)` work per kept waypoint instead of
/// `O(n)` and is part of the routine's contract.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim2", feature = "f32"))] {
/// use sidestep2d::na::Point2;
/// use sidestep2d::pathing::simplify_path;
///
/// let path = [
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(4.0, 0.0),
///     Point2::new(4.0, 4.0),
/// ];
///
/// // Without obstacles, only the endpoints survive.
/// let simplified = simplify_path(&path, |_, _| true);
/// assert_eq!(simplified, vec![Point2::new(0.0, 0.0), Point2::new(4.0, 4.0)]);
/// # }
/// ```
pub fn simplify_path<F>(path: &[Point<Real>], mut has_line_of_sight: F) -> Vec<Point<Real>>
where
    F: FnMut(&Point<Real>, &Point<Real>) -> bool,
{
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut simplified = Vec::new();
    let mut current = 0;
    simplified.push(path[0]);

    while current < path.len() - 1 {
        let next =
            furthest_visible(path, current, &mut has_line_of_sight).unwrap_or(current + 1);
        simplified.push(path[next]);
        current = next;
    }

    simplified
}

/// In-place variant of [`simplify_path`]: overwrites `path` with the
/// simplified subsequence and truncates it.
pub fn simplify_path_in_place<F>(path: &mut Vec<Point<Real>>, mut has_line_of_sight: F)
where
    F: FnMut(&Point<Real>, &Point<Real>) -> bool,
{
    if path.len() <= 2 {
        return;
    }

    let mut current = 0;
    // Index of the last kept waypoint; everything at or before it is
    // already final. The walk only ever reads at or after `current`,
    // which never trails the write position.
    let mut kept = 0;

    while current < path.len() - 1 {
        let next =
            furthest_visible(path, current, &mut has_line_of_sight).unwrap_or(current + 1);
        kept += 1;
        path[kept] = path[next];
        current = next;
    }

    path.truncate(kept + 1);
}

/// Binary-searches the furthest waypoint after `current` that the
/// predicate reports visible from it, if any.
fn furthest_visible<F>(path: &[Point<Real>], current: usize, has_line_of_sight: &mut F) -> Option<usize>
where
    F: FnMut(&Point<Real>, &Point<Real>) -> bool,
{
    let mut lo = current + 1;
    let mut hi = path.len() - 1;
    let mut furthest = None;

    while lo <= hi {
        let mid = (lo + hi) / 2;
        if has_line_of_sight(&path[current], &path[mid]) {
            furthest = Some(mid);
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    furthest
}

#[cfg(test)]
mod tests {
    use super::{simplify_path, simplify_path_in_place};
    use crate::math::{Point, Real, Vector};
    use na;

    fn straight_path(len: usize) -> Vec<Point<Real>> {
        (0..len)
            .map(|i| Point::origin() + Vector::x() * i as Real)
            .collect()
    }

    #[test]
    fn short_paths_are_unchanged() {
        for len in 0..=2 {
            let path = straight_path(len);
            assert_eq!(simplify_path(&path, |_, _| false), path);
        }
    }

    #[test]
    fn unobstructed_path_collapses_to_endpoints() {
        let path = straight_path(10);
        let simplified = simplify_path(&path, |_, _| true);
        assert_eq!(simplified, vec![path[0], path[9]]);
    }

    #[test]
    fn blind_predicate_keeps_every_waypoint() {
        let path = straight_path(6);
        assert_eq!(simplify_path(&path, |_, _| false), path);
    }

    #[test]
    fn bounded_sight_hops_by_visibility_range() {
        let path = straight_path(11);
        let see = |a: &Point<Real>, b: &Point<Real>| na::distance(a, b) < 3.0;

        let simplified = simplify_path(&path, see);
        assert_eq!(
            simplified,
            vec![path[0], path[2], path[4], path[6], path[8], path[10]]
        );
    }

    #[test]
    fn simplification_is_idempotent() {
        let path = straight_path(11);
        let see = |a: &Point<Real>, b: &Point<Real>| na::distance(a, b) < 3.0;

        let once = simplify_path(&path, see);
        let twice = simplify_path(&once, see);
        assert_eq!(once, twice);
    }

    #[test]
    fn in_place_variant_matches_the_allocating_one() {
        let path = straight_path(11);
        let see = |a: &Point<Real>, b: &Point<Real>| na::distance(a, b) < 3.0;

        let simplified = simplify_path(&path, see);
        let mut in_place = path.clone();
        simplify_path_in_place(&mut in_place, see);

        assert_eq!(in_place, simplified);
    }
}
