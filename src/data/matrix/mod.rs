//! # Upper-triangular matrix
//!
//! A square matrix of which only the entries on or above the diagonal are stored: row
//! `i` of an order `n` matrix is a vector of length `n - i` with start index `i`, so
//! logical column access `[i][j]` is valid exactly for `i <= j < n`. Sub-diagonal
//! entries are not represented, not zero-stored.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};
use std::slice::Iter;

use itertools::izip;
use num_traits::Zero;

use crate::data::error::Error;
use crate::data::vector::Vector;

/// Largest order an upper-triangular matrix may have.
pub const MAX_MATRIX_SIZE: usize = 10_000;

/// Owns one offset vector per row. Order is fixed at creation.
///
/// Built by composition over `Vector` rather than by extending it: the jagged row
/// shape makes uniform whole-container scalar operations meaningless, so only the
/// row-aware operations below are exposed.
#[derive(Debug, Clone)]
pub struct UpperTriangular<T> {
    rows: Vec<Vector<T>>,
}

impl<T> UpperTriangular<T> {
    /// Create a zero-filled upper-triangular matrix.
    ///
    /// Row `i` is derived as a vector of length `order - i` with start index `i`.
    ///
    /// # Arguments
    ///
    /// * `order`: Number of rows and columns, in `[1, MAX_MATRIX_SIZE]`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidSize` when `order` lies outside of the supported range.
    pub fn new(order: usize) -> Result<Self, Error>
    where
        T: Zero + Clone,
    {
        Self::check_order(order)?;

        let rows = (0..order)
            .map(|i| Vector::new(order - i, i))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }

    /// Wrap existing rows in an upper-triangular matrix.
    ///
    /// # Arguments
    ///
    /// * `rows`: One vector per row; row `i` must have length `rows.len() - i` and
    ///   start index `i`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidSize` when the number of rows lies outside of the supported
    /// range or a row has the wrong length, `Error::InvalidStartIndex` when a row's
    /// start index does not equal its row number.
    pub fn from_rows(rows: Vec<Vector<T>>) -> Result<Self, Error> {
        let order = rows.len();
        Self::check_order(order)?;

        for (i, row) in rows.iter().enumerate() {
            if row.len() != order - i {
                return Err(Error::InvalidSize {
                    size: row.len(),
                    minimum: order - i,
                    maximum: order - i,
                });
            }
            if row.start_index() != i {
                return Err(Error::InvalidStartIndex {
                    start_index: row.start_index(),
                    len: row.len(),
                });
            }
        }

        Ok(Self { rows, })
    }

    /// Whether an order lies in the supported range.
    fn check_order(order: usize) -> Result<(), Error> {
        if order < 1 || order > MAX_MATRIX_SIZE {
            return Err(Error::InvalidSize { size: order, minimum: 1, maximum: MAX_MATRIX_SIZE, });
        }

        Ok(())
    }

    /// The number of rows and columns of this matrix.
    pub fn order(&self) -> usize {
        self.rows.len()
    }

    /// Retrieve row `i`.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` when `i` is outside of `[0, order)`.
    pub fn row(&self, i: usize) -> Result<&Vector<T>, Error> {
        self.rows.get(i).ok_or(Error::IndexOutOfRange {
            index: i,
            start_index: 0,
            len: self.rows.len(),
        })
    }

    /// Iterate over the rows of this matrix, top to bottom.
    pub fn iter_rows(&self) -> Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    /// Retrieve the value at row `i`, logical column `j`.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` when `i` is outside of `[0, order)` or `j` outside of
    /// `[i, order)`; sub-diagonal entries are not addressable.
    pub fn get(&self, i: usize, j: usize) -> Result<&T, Error> {
        self.row(i)?.get(j)
    }

    /// Retrieve the value at row `i`, logical column `j` for in-place mutation.
    ///
    /// # Errors
    ///
    /// As for `get`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T, Error> {
        let len = self.rows.len();
        self.rows
            .get_mut(i)
            .ok_or(Error::IndexOutOfRange { index: i, start_index: 0, len, })?
            .get_mut(j)
    }

    /// Set the value at row `i`, logical column `j`.
    ///
    /// # Errors
    ///
    /// As for `get`; the matrix is unchanged in that case.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), Error> {
        *self.get_mut(i, j)? = value;

        Ok(())
    }

    /// Whether both operands have the same order.
    fn check_compatibility(&self, other: &Self) -> Result<(), Error> {
        if self.rows.len() != other.rows.len() {
            return Err(Error::SizeMismatch { left: self.rows.len(), right: other.rows.len(), });
        }

        Ok(())
    }
}

impl<T> UpperTriangular<T>
where
    for<'r> &'r T: Add<&'r T, Output = T>,
{
    /// Add another matrix element-wise, producing a new matrix.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` when the orders differ.
    pub fn element_wise_add(&self, other: &Self) -> Result<Self, Error> {
        self.check_compatibility(other)?;

        // Rows of equal rank have identical length and start index by construction.
        let rows = izip!(&self.rows, &other.rows)
            .map(|(lhs, rhs)| lhs.element_wise_add(rhs))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }
}

impl<T> UpperTriangular<T>
where
    for<'r> &'r T: Sub<&'r T, Output = T>,
{
    /// Subtract another matrix element-wise, producing a new matrix.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` when the orders differ.
    pub fn element_wise_subtract(&self, other: &Self) -> Result<Self, Error> {
        self.check_compatibility(other)?;

        let rows = izip!(&self.rows, &other.rows)
            .map(|(lhs, rhs)| lhs.element_wise_subtract(rhs))
            .collect::<Result<_, _>>()?;

        Ok(Self { rows, })
    }
}

impl<T: PartialEq> PartialEq for UpperTriangular<T> {
    fn eq(&self, other: &Self) -> bool {
        // Row equality already compares length, start index and contents, so a
        // malformed row can never compare equal to a well formed one.
        self.rows.len() == other.rows.len()
            && izip!(&self.rows, &other.rows).all(|(lhs, rhs)| lhs == rhs)
    }
}

impl<T: Eq> Eq for UpperTriangular<T> {}

impl<T: Display> Display for UpperTriangular<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// The order 3 matrix with `[0][0] = 1`, `[0][1] = 1`, `[1][1] = 3`, zero
    /// elsewhere.
    fn test_matrix() -> UpperTriangular<i32> {
        let mut m = UpperTriangular::new(3).unwrap();
        m.set(0, 0, 1).unwrap();
        m.set(0, 1, 1).unwrap();
        m.set(1, 1, 3).unwrap();
        m
    }

    #[test]
    fn new_derives_triangular_rows() {
        let m = UpperTriangular::<i32>::new(5).unwrap();
        assert_eq!(m.order(), 5);

        for i in 0..m.order() {
            let row = m.row(i).unwrap();
            assert_eq!(row.len(), 5 - i);
            assert_eq!(row.start_index(), i);
        }
    }

    #[test]
    fn new_order_out_of_range() {
        assert_eq!(
            UpperTriangular::<i32>::new(0),
            Err(Error::InvalidSize { size: 0, minimum: 1, maximum: MAX_MATRIX_SIZE, }),
        );
        assert_eq!(
            UpperTriangular::<i32>::new(MAX_MATRIX_SIZE + 1),
            Err(Error::InvalidSize {
                size: MAX_MATRIX_SIZE + 1,
                minimum: 1,
                maximum: MAX_MATRIX_SIZE,
            }),
        );
    }

    #[test]
    fn from_rows() {
        let rows = vec![
            Vector::from_data(vec![1, 2, 3], 0).unwrap(),
            Vector::from_data(vec![4, 5], 1).unwrap(),
            Vector::from_data(vec![6], 2).unwrap(),
        ];
        let m = UpperTriangular::from_rows(rows).unwrap();
        assert_eq!(m.get(0, 2), Ok(&3));
        assert_eq!(m.get(2, 2), Ok(&6));

        // A row of the wrong length
        let rows = vec![
            Vector::from_data(vec![1, 2], 0).unwrap(),
            Vector::from_data(vec![4], 1).unwrap(),
            Vector::from_data(vec![6], 2).unwrap(),
        ];
        assert!(UpperTriangular::from_rows(rows).is_err());

        // A row with the wrong start index
        let rows = vec![
            Vector::from_data(vec![1, 2], 0).unwrap(),
            Vector::from_data(vec![4], 0).unwrap(),
        ];
        assert_eq!(
            UpperTriangular::from_rows(rows),
            Err(Error::InvalidStartIndex { start_index: 0, len: 1, }),
        );
    }

    #[test]
    fn get_set() {
        let mut m = UpperTriangular::<i32>::new(6).unwrap();

        m.set(0, 3, 5).unwrap();
        assert_eq!(m.get(0, 3), Ok(&5));

        // On the diagonal
        m.set(5, 5, 7).unwrap();
        assert_eq!(m.get(5, 5), Ok(&7));

        *m.get_mut(0, 3).unwrap() += 1;
        assert_eq!(m.get(0, 3), Ok(&6));
    }

    #[test]
    fn sub_diagonal_is_not_addressable() {
        let mut m = UpperTriangular::<i32>::new(4).unwrap();

        assert_eq!(
            m.get(2, 1),
            Err(Error::IndexOutOfRange { index: 1, start_index: 2, len: 2, }),
        );
        assert!(m.set(3, 0, 1).is_err());
    }

    #[test]
    fn out_of_range_access() {
        let m = UpperTriangular::<i32>::new(4).unwrap();

        // Row outside of the matrix
        assert_eq!(
            m.get(4, 0),
            Err(Error::IndexOutOfRange { index: 4, start_index: 0, len: 4, }),
        );
        // Column beyond the order
        assert_eq!(
            m.get(0, 4),
            Err(Error::IndexOutOfRange { index: 4, start_index: 0, len: 4, }),
        );
        assert!(m.row(4).is_err());
    }

    #[test]
    fn clone_has_its_own_storage() {
        let original = test_matrix();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set(0, 0, 9).unwrap();
        assert_ne!(copy, original);
        assert_eq!(original.get(0, 0), Ok(&1));
    }

    #[test]
    fn eq() {
        assert_eq!(test_matrix(), test_matrix());

        // Differing orders
        assert_ne!(test_matrix(), UpperTriangular::<i32>::new(2).unwrap());

        // Same order, one entry differs
        let mut other = test_matrix();
        other.set(2, 2, 1).unwrap();
        assert_ne!(test_matrix(), other);
    }

    #[test]
    fn element_wise() {
        let m = test_matrix();
        let sum = m.element_wise_add(&m).unwrap();

        assert_eq!(sum.get(0, 0), Ok(&2));
        assert_eq!(sum.get(0, 1), Ok(&2));
        assert_eq!(sum.get(1, 1), Ok(&6));
        assert_eq!(sum.get(2, 2), Ok(&0));

        let difference = sum.element_wise_subtract(&m).unwrap();
        assert_eq!(difference, m);

        // The operands are unchanged
        assert_eq!(m, test_matrix());
    }

    #[test]
    fn element_wise_size_mismatch() {
        let m = test_matrix();
        let smaller = UpperTriangular::<i32>::new(2).unwrap();

        assert_eq!(
            m.element_wise_add(&smaller),
            Err(Error::SizeMismatch { left: 3, right: 2, }),
        );
        assert_eq!(
            m.element_wise_subtract(&smaller),
            Err(Error::SizeMismatch { left: 3, right: 2, }),
        );
    }

    #[test]
    fn display() {
        let m = test_matrix();
        assert_eq!(m.to_string(), "1 1 0 \n3 0 \n0 \n");
    }
}
