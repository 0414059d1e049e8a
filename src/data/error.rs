//! # Error reporting for container operations
//!
//! Every fallible operation on the vector and matrix types reports its failure through
//! the single `Error` enum in this module. Errors are raised at the point of violation
//! and propagate to the caller unchanged; no operation leaves the receiver half-mutated.
use std::error;
use std::fmt;

/// An `Error` is created when an operation on a container violates its contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A requested size or order lies outside the supported range.
    InvalidSize {
        /// The rejected size or order.
        size: usize,
        /// Smallest accepted value (`0` for vectors, `1` for matrices).
        minimum: usize,
        /// Largest accepted value.
        maximum: usize,
    },
    /// A start index that can not address the requested window.
    ///
    /// Start indices are unsigned, so the failure mode is a window
    /// `[start_index, start_index + len)` whose upper end does not fit in a `usize`.
    InvalidStartIndex {
        /// The rejected start index.
        start_index: usize,
        /// Length of the window that was requested at that offset.
        len: usize,
    },
    /// A logical index outside the valid addressable window.
    ///
    /// For the triangular matrix this includes sub-diagonal column access: those
    /// entries are not represented, so their indices are not addressable.
    IndexOutOfRange {
        /// The rejected logical index.
        index: usize,
        /// First valid logical index.
        start_index: usize,
        /// Number of addressable elements from `start_index` on.
        len: usize,
    },
    /// A binary operation between two containers of incompatible shape.
    SizeMismatch {
        /// Size (or order) of the receiver.
        left: usize,
        /// Size (or order) of the other operand.
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSize { size, minimum, maximum } => {
                write!(f, "size {} outside of supported range [{}, {}]", size, minimum, maximum)
            },
            Error::InvalidStartIndex { start_index, len } => {
                write!(
                    f,
                    "start index {} can not address a window of length {}",
                    start_index, len,
                )
            },
            Error::IndexOutOfRange { index, start_index, len } => {
                write!(
                    f,
                    "index {} outside of addressable window [{}, {})",
                    index, start_index, start_index + len,
                )
            },
            Error::SizeMismatch { left, right } => {
                write!(f, "incompatible sizes {} and {}", left, right)
            },
        }
    }
}

impl error::Error for Error {
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let error = Error::InvalidSize { size: 15, minimum: 1, maximum: 10 };
        assert_eq!(error.to_string(), "size 15 outside of supported range [1, 10]");

        let error = Error::IndexOutOfRange { index: 7, start_index: 2, len: 3 };
        assert_eq!(error.to_string(), "index 7 outside of addressable window [2, 5)");

        let error = Error::SizeMismatch { left: 3, right: 4 };
        assert_eq!(error.to_string(), "incompatible sizes 3 and 4");
    }
}
