//! # Offset-indexed dense vector
//!
//! Wrapping a `Vec` such that it has a fixed length and a logical start index: indices
//! in `[start_index, start_index + len)` map onto the physical slots `[0, len)`.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use itertools::izip;
use num_traits::Zero;

use crate::data::error::Error;

/// Largest number of elements a vector may hold.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;

/// Uses a `Vec` as underlying data structure. Length and start index are fixed at
/// creation.
///
/// Every instance owns its storage exclusively; cloning produces an independent buffer.
#[derive(Debug, Clone)]
pub struct Vector<T> {
    data: Vec<T>,
    start_index: usize,
}

impl<T> Vector<T> {
    /// Create a zero-filled vector.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, at most `MAX_VECTOR_SIZE`. Zero is allowed.
    /// * `start_index`: Logical index of the first element.
    ///
    /// # Errors
    ///
    /// `Error::InvalidSize` when `len` exceeds `MAX_VECTOR_SIZE`,
    /// `Error::InvalidStartIndex` when the window `[start_index, start_index + len)`
    /// does not fit in a `usize`.
    pub fn new(len: usize, start_index: usize) -> Result<Self, Error>
    where
        T: Zero + Clone,
    {
        Self::check_shape(len, start_index)?;

        Ok(Self { data: vec![T::zero(); len], start_index, })
    }

    /// Wrap existing values in a vector.
    ///
    /// # Arguments
    ///
    /// * `data`: Element values, in logical index order. Will not be changed and
    ///   directly used for creation.
    /// * `start_index`: Logical index of the first element.
    ///
    /// # Errors
    ///
    /// The same shape validation as `new`, applied to `data.len()`.
    pub fn from_data(data: Vec<T>, start_index: usize) -> Result<Self, Error> {
        Self::check_shape(data.len(), start_index)?;

        Ok(Self { data, start_index, })
    }

    /// Whether a length and start index describe an addressable window.
    fn check_shape(len: usize, start_index: usize) -> Result<(), Error> {
        if len > MAX_VECTOR_SIZE {
            return Err(Error::InvalidSize { size: len, minimum: 0, maximum: MAX_VECTOR_SIZE, });
        }
        if start_index.checked_add(len).is_none() {
            return Err(Error::InvalidStartIndex { start_index, len, });
        }

        Ok(())
    }

    /// Map a logical index onto its physical slot.
    fn physical_index(&self, index: usize) -> Result<usize, Error> {
        if index < self.start_index || index - self.start_index >= self.data.len() {
            return Err(Error::IndexOutOfRange {
                index,
                start_index: self.start_index,
                len: self.data.len(),
            });
        }

        Ok(index - self.start_index)
    }

    /// Retrieve the value at a logical index.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` outside of `[start_index, start_index + len)`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let i = self.physical_index(index)?;

        Ok(&self.data[i])
    }

    /// Retrieve the value at a logical index for in-place mutation.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` outside of `[start_index, start_index + len)`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let i = self.physical_index(index)?;

        Ok(&mut self.data[i])
    }

    /// Set the value at a logical index.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` outside of `[start_index, start_index + len)`; the
    /// vector is unchanged in that case.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), Error> {
        *self.get_mut(index)? = value;

        Ok(())
    }

    /// Iterate over the values of this vector, in logical index order.
    pub fn iter_values(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// The number of elements in this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The logical index of the first element.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Whether both operands have the same number of elements.
    fn check_compatibility(&self, other: &Self) -> Result<(), Error> {
        if self.data.len() != other.data.len() {
            return Err(Error::SizeMismatch { left: self.data.len(), right: other.data.len(), });
        }

        Ok(())
    }
}

impl<T> Vector<T>
where
    for<'r> &'r T: Add<&'r T, Output = T>,
{
    /// Add a scalar to every element, producing a new vector.
    ///
    /// Length and start index are preserved; the receiver is not mutated.
    pub fn add_scalar(&self, value: &T) -> Self {
        Self {
            data: self.data.iter().map(|element| element + value).collect(),
            start_index: self.start_index,
        }
    }

    /// Add another vector element-wise, producing a new vector.
    ///
    /// The result takes the receiver's start index.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` when the lengths differ.
    pub fn element_wise_add(&self, other: &Self) -> Result<Self, Error> {
        self.check_compatibility(other)?;

        Ok(Self {
            data: izip!(&self.data, &other.data).map(|(lhs, rhs)| lhs + rhs).collect(),
            start_index: self.start_index,
        })
    }
}

impl<T> Vector<T>
where
    for<'r> &'r T: Sub<&'r T, Output = T>,
{
    /// Subtract a scalar from every element, producing a new vector.
    ///
    /// Length and start index are preserved; the receiver is not mutated.
    pub fn subtract_scalar(&self, value: &T) -> Self {
        Self {
            data: self.data.iter().map(|element| element - value).collect(),
            start_index: self.start_index,
        }
    }

    /// Subtract another vector element-wise, producing a new vector.
    ///
    /// The result takes the receiver's start index.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` when the lengths differ.
    pub fn element_wise_subtract(&self, other: &Self) -> Result<Self, Error> {
        self.check_compatibility(other)?;

        Ok(Self {
            data: izip!(&self.data, &other.data).map(|(lhs, rhs)| lhs - rhs).collect(),
            start_index: self.start_index,
        })
    }
}

impl<T> Vector<T>
where
    for<'r> &'r T: Mul<&'r T, Output = T>,
{
    /// Multiply every element by a scalar, producing a new vector.
    ///
    /// Length and start index are preserved; the receiver is not mutated.
    pub fn multiply_scalar(&self, value: &T) -> Self {
        Self {
            data: self.data.iter().map(|element| element * value).collect(),
            start_index: self.start_index,
        }
    }
}

impl<T> Vector<T>
where
    T: Zero + AddAssign<T>,
    for<'r> &'r T: Mul<&'r T, Output = T>,
{
    /// Compute the inner product with another vector.
    ///
    /// The sum of element-wise products, accumulated in `T`. Choosing an element type
    /// wide enough to avoid overflow is up to the caller.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` when the lengths differ.
    pub fn inner_product(&self, other: &Self) -> Result<T, Error> {
        self.check_compatibility(other)?;

        let mut total = T::zero();
        for (lhs, rhs) in izip!(&self.data, &other.data) {
            total += lhs * rhs;
        }

        Ok(total)
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        // Either attribute differing already rules out equality.
        if self.data.len() != other.data.len() || self.start_index != other.start_index {
            return false;
        }

        self.data == other.data
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index >= self.start_index);
        debug_assert!(index - self.start_index < self.data.len());

        &self.data[index - self.start_index]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index >= self.start_index);
        debug_assert!(index - self.start_index < self.data.len());

        &mut self.data[index - self.start_index]
    }
}

impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for value in &self.data {
            write!(f, "{} ", value)?;
        }

        Ok(())
    }
}
