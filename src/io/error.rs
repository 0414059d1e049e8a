//! # Error reporting for reading of containers from text
//!
//! Describes problems encountered while reading and parsing whitespace-delimited
//! element streams.
use std::error;
use std::fmt;
use std::io;

/// A `ReadError` is created when an error was encountered during IO or parsing.
#[derive(Debug)]
pub enum ReadError {
    /// The stream couldn't be read, or reading it was interrupted.
    IO(io::Error),
    /// Contents of the stream could not be parsed into elements.
    Parse(ParseError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadError::IO(error) => error.fmt(f),
            ReadError::Parse(error) => error.fmt(f),
        }
    }
}

impl error::Error for ReadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ReadError::IO(error) => Some(error),
            ReadError::Parse(error) => Some(error),
        }
    }
}

/// A `ParseError` represents all errors encountered while turning tokens into
/// elements: a token that is not a valid element, or fewer tokens than the target has
/// elements.
#[derive(Debug)]
pub struct ParseError {
    description: String,
}

impl ParseError {
    /// Create a new `ParseError` with a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)
    }
}

impl error::Error for ParseError {
}
