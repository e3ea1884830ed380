//! Non-persistent geometric queries.
//!
//! Everything here is a pure function of its inputs: no query mutates
//! the shapes it is given, and malformed input (a zero-length ray
//! direction, a degenerate segment) degenerates to "no hit" rather than
//! failing.

pub use self::ray::{Ray, EPS};

pub mod ray;
