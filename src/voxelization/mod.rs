//! Obstacle-aware space decomposition.

pub use self::voxelizer::{ObstacleOracle, Voxelizer};

mod voxelizer;
