//! # Offset-indexed vectors and upper-triangular matrices
//!
//! Fixed-size numeric containers: a dense vector whose logical indices start at a
//! configurable offset, and an upper-triangular matrix storing one such vector per row.
//! Sizes are fixed at construction; every operation either fully succeeds or fails
//! without touching the receiver.
#![warn(missing_docs)]

pub mod data;
pub mod io;
