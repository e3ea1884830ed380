use crate::bounding_volume::Aabb;
use crate::field::ObstacleField;
use crate::math::{Real, DIM};

/// An oracle answering whether a region overlaps any obstacle.
///
/// The voxelizer only ever asks this one question, so anything able to
/// answer it can drive a decomposition: an [`ObstacleField`], or a plain
/// closure in tests.
pub trait ObstacleOracle {
    /// Returns `true` iff `region` overlaps at least one obstacle.
    fn is_obstructed(&self, region: &Aabb) -> bool;
}

impl ObstacleOracle for ObstacleField {
    #[inline]
    fn is_obstructed(&self, region: &Aabb) -> bool {
        self.intersects(region)
    }
}

impl<F: Fn(&Aabb) -> bool> ObstacleOracle for F {
    #[inline]
    fn is_obstructed(&self, region: &Aabb) -> bool {
        self(region)
    }
}

/// Recursively decomposes a region into maximal obstacle-free cells.
///
/// A region the oracle reports free is emitted whole, as a single cell.
/// An obstructed region is split at its center (four quadrants in 2D,
/// eight octants in 3D) and each part is decomposed in turn, unless the
/// split would produce cells with an edge shorter than
/// `min_cell_extent`, in which case the obstructed region is dropped:
/// it appears in the output neither as free space nor as an obstacle.
/// Regions below the minimum are considered too fine to resolve, so the
/// output only covers the input region minus those dropped slivers;
/// callers relying on full coverage must choose `min_cell_extent`
/// accordingly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Voxelizer {
    /// The minimum edge length of an emitted cell.
    pub min_cell_extent: Real,
}

impl Default for Voxelizer {
    fn default() -> Self {
        Voxelizer {
            min_cell_extent: 1.0,
        }
    }
}

impl Voxelizer {
    /// Creates a voxelizer with the given minimum cell edge length.
    pub fn new(min_cell_extent: Real) -> Self {
        Voxelizer { min_cell_extent }
    }

    /// Decomposes `region` into obstacle-free cells.
    pub fn voxelize(&self, region: &Aabb, oracle: &impl ObstacleOracle) -> Vec<Aabb> {
        let mut cells = Vec::new();
        self.voxelize_into(region, oracle, &mut cells);
        cells
    }

    /// Decomposes `region` into obstacle-free cells, appending them to
    /// `cells`.
    pub fn voxelize_into(
        &self,
        region: &Aabb,
        oracle: &impl ObstacleOracle,
        cells: &mut Vec<Aabb>,
    ) {
        if !oracle.is_obstructed(region) {
            cells.push(*region);
        } else if self.can_halve(region) {
            for sub in region.split_at_center() {
                self.voxelize_into(&sub, oracle, cells);
            }
        }
        // An obstructed region too small to halve is dropped.
    }

    /// Explicit-stack equivalent of [`Voxelizer::voxelize`], for regions
    /// whose decomposition would recurse deeply.
    pub fn voxelize_with_stack(&self, region: &Aabb, oracle: &impl ObstacleOracle) -> Vec<Aabb> {
        let mut cells = Vec::new();
        let mut pending = vec![*region];

        while let Some(next) = pending.pop() {
            if !oracle.is_obstructed(&next) {
                cells.push(next);
            } else if self.can_halve(&next) {
                pending.extend(next.split_at_center());
            }
        }

        cells
    }

    /// Whether halving `region` keeps every cell edge at or above the
    /// minimum.
    fn can_halve(&self, region: &Aabb) -> bool {
        let half = region.half_extents();
        (0..DIM).all(|i| half[i] >= self.min_cell_extent)
    }
}
