//! Spatial partitioning tools.

pub use self::partition_tree::{
    ObstacleId, PartitionTree, RayHit, TreeConfig, DEFAULT_MAX_ITEMS, DEFAULT_MAX_LEVEL,
    DEFAULT_RAYCAST_MARGIN,
};

mod partition_tree;
