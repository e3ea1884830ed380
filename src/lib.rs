/*!
sidestep
========

**sidestep** is a 2 and 3-dimensional spatial-obstacle index written with
the rust programming language. It stores axis-aligned obstacles over a
bounded grid and answers three kinds of questions about them: does a
region overlap any obstacle, what is the first obstacle hit by a ray
within a given distance, and which waypoints of a path can be dropped
without losing obstacle-free line-of-sight.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod field;
pub mod partitioning;
pub mod pathing;
pub mod query;
pub mod voxelization;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim3")]
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The dimension of the space multiplied by two.
    ///
    /// This is also the number of boundary segments of an axis-aligned
    /// box: one per face.
    pub const TWO_DIM: usize = DIM * 2;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}

/// Compilation flags dependent aliases for mathematical types.
#[cfg(feature = "dim2")]
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, Vector2};

    /// The dimension of the space.
    pub const DIM: usize = 2;

    /// The dimension of the space multiplied by two.
    ///
    /// This is also the number of boundary segments of an axis-aligned
    /// rectangle: one per edge.
    pub const TWO_DIM: usize = DIM * 2;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;
}
