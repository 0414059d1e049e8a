//! # Reading and writing of containers
//!
//! Text representation: a vector is its elements in logical index order, delimited by
//! whitespace; a matrix is one row per line. No sizes are written or read, so the
//! reader must already hold a target of the right shape.
use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

use crate::data::matrix::UpperTriangular;
use crate::data::vector::Vector;
use crate::io::error::{ParseError, ReadError};

pub mod error;

/// Fill a vector with values read from a stream.
///
/// The entire stream is read; the leading `vector.len()` whitespace-delimited tokens
/// are parsed, any surplus is ignored.
///
/// # Arguments
///
/// * `reader`: Text stream holding at least `vector.len()` tokens.
/// * `vector`: Target; its length and start index determine what is read.
///
/// # Errors
///
/// `ReadError::IO` when the stream can't be read, `ReadError::Parse` when a token is
/// not a valid element or the stream holds too few tokens. The target is only modified
/// on success.
pub fn read_vector<T, R>(reader: &mut R, vector: &mut Vector<T>) -> Result<(), ReadError>
where
    T: FromStr,
    T::Err: Display,
    R: Read,
{
    let mut contents = String::new();
    reader.read_to_string(&mut contents).map_err(ReadError::IO)?;

    let values = parse_values(&mut contents.split_whitespace(), vector.len())?;
    for (index, value) in (vector.start_index()..).zip(values) {
        vector.set(index, value).expect("window was sized for this target");
    }

    Ok(())
}

/// Fill a matrix with values read from a stream, row by row.
///
/// Newlines and spaces are equivalent delimiters, so both the one-row-per-line output
/// of `write_matrix` and a flat token sequence are accepted.
///
/// # Arguments
///
/// * `reader`: Text stream holding at least as many tokens as the matrix has entries.
/// * `matrix`: Target; its order determines what is read.
///
/// # Errors
///
/// As for `read_vector`. The target is only modified on success.
pub fn read_matrix<T, R>(reader: &mut R, matrix: &mut UpperTriangular<T>) -> Result<(), ReadError>
where
    T: FromStr,
    T::Err: Display,
    R: Read,
{
    let mut contents = String::new();
    reader.read_to_string(&mut contents).map_err(ReadError::IO)?;

    let mut tokens = contents.split_whitespace();
    let mut rows = Vec::with_capacity(matrix.order());
    for i in 0..matrix.order() {
        rows.push(parse_values(&mut tokens, matrix.order() - i)?);
    }

    for (i, row) in rows.into_iter().enumerate() {
        for (j, value) in (i..).zip(row) {
            matrix.set(i, j, value).expect("row was sized for this target");
        }
    }

    Ok(())
}

/// Parse the next `count` tokens.
fn parse_values<'a, T>(
    tokens: &mut impl Iterator<Item = &'a str>,
    count: usize,
) -> Result<Vec<T>, ReadError>
where
    T: FromStr,
    T::Err: Display,
{
    let mut values = Vec::with_capacity(count);
    for nr_parsed in 0..count {
        let token = tokens.next().ok_or_else(|| {
            ReadError::Parse(ParseError::new(format!(
                "expected {} values, stream ended after {}",
                count, nr_parsed,
            )))
        })?;
        let value = token.parse::<T>().map_err(|error| {
            ReadError::Parse(ParseError::new(format!(
                "could not parse \"{}\": {}",
                token, error,
            )))
        })?;
        values.push(value);
    }

    Ok(values)
}

/// Write a vector to a stream, elements delimited by single spaces.
///
/// # Errors
///
/// Any `std::io::Error` the underlying writer produces.
pub fn write_vector<T: Display, W: Write>(
    writer: &mut W,
    vector: &Vector<T>,
) -> Result<(), std::io::Error> {
    write!(writer, "{}", vector)
}

/// Write a matrix to a stream, one row per line.
///
/// # Errors
///
/// Any `std::io::Error` the underlying writer produces.
pub fn write_matrix<T: Display, W: Write>(
    writer: &mut W,
    matrix: &UpperTriangular<T>,
) -> Result<(), std::io::Error> {
    write!(writer, "{}", matrix)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_vector_from_tokens() {
        let mut v = Vector::<i32>::new(3, 1).unwrap();
        read_vector(&mut "4 5 6".as_bytes(), &mut v).unwrap();

        assert_eq!(v, Vector::from_data(vec![4, 5, 6], 1).unwrap());
    }

    #[test]
    fn read_vector_ignores_surplus() {
        let mut v = Vector::<i32>::new(2, 0).unwrap();
        read_vector(&mut "1 2 3 4".as_bytes(), &mut v).unwrap();

        assert_eq!(v, Vector::from_data(vec![1, 2], 0).unwrap());
    }

    #[test]
    fn read_vector_newlines_delimit() {
        let mut v = Vector::<i32>::new(3, 0).unwrap();
        read_vector(&mut "1\n2\n3\n".as_bytes(), &mut v).unwrap();

        assert_eq!(v, Vector::from_data(vec![1, 2, 3], 0).unwrap());
    }

    #[test]
    fn read_vector_truncated_stream() {
        let mut v = Vector::<i32>::new(3, 0).unwrap();
        let before = v.clone();
        let result = read_vector(&mut "1 2".as_bytes(), &mut v);

        assert!(matches!(result, Err(ReadError::Parse(_))));
        // The target is untouched on failure
        assert_eq!(v, before);
    }

    #[test]
    fn read_vector_bad_token() {
        let mut v = Vector::<i32>::new(2, 0).unwrap();
        let result = read_vector(&mut "1 x".as_bytes(), &mut v);

        assert!(matches!(result, Err(ReadError::Parse(_))));
    }

    #[test]
    fn vector_round_trip() {
        let v = Vector::from_data(vec![7, 8, 9], 2).unwrap();
        let mut buffer = Vec::new();
        write_vector(&mut buffer, &v).unwrap();

        let mut read_back = Vector::<i32>::new(3, 2).unwrap();
        read_vector(&mut buffer.as_slice(), &mut read_back).unwrap();
        assert_eq!(read_back, v);
    }

    #[test]
    fn matrix_round_trip() {
        let mut m = UpperTriangular::<i32>::new(3).unwrap();
        m.set(0, 0, 1).unwrap();
        m.set(0, 1, 1).unwrap();
        m.set(1, 1, 3).unwrap();

        let mut buffer = Vec::new();
        write_matrix(&mut buffer, &m).unwrap();
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "1 1 0 \n3 0 \n0 \n");

        let mut read_back = UpperTriangular::<i32>::new(3).unwrap();
        read_matrix(&mut buffer.as_slice(), &mut read_back).unwrap();
        assert_eq!(read_back, m);
    }

    #[test]
    fn read_matrix_flat_tokens() {
        let mut m = UpperTriangular::<i32>::new(2).unwrap();
        read_matrix(&mut "1 2 3".as_bytes(), &mut m).unwrap();

        assert_eq!(m.get(0, 0), Ok(&1));
        assert_eq!(m.get(0, 1), Ok(&2));
        assert_eq!(m.get(1, 1), Ok(&3));
    }

    #[test]
    fn read_matrix_truncated_stream() {
        let mut m = UpperTriangular::<i32>::new(3).unwrap();
        let before = m.clone();
        let result = read_matrix(&mut "1 2 3 4".as_bytes(), &mut m);

        assert!(matches!(result, Err(ReadError::Parse(_))));
        assert_eq!(m, before);
    }
}
