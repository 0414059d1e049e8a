//! # Container data structures
//!
//! The vector and matrix types and the errors their operations produce. The matrix is
//! built on top of the vector, one row per vector.

pub mod error;
pub mod matrix;
pub mod vector;
