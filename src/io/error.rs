//! # Error reporting for reading vectors and matrices from text
//!
//! Reading from a stream can fail in two ways: the stream itself can't be read, or its contents
//! don't describe the value that is being filled.
use std::error::Error;
use std::fmt;
use std::io;

use crate::data::linear_algebra::error::Error as ValueError;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The stream couldn't be read, or reading was interrupted.
    IO(io::Error),
    /// The text was read, but could not be parsed into the value.
    Parse(ValueError),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::IO(error) => write!(f, "{}", error),
            ImportError::Parse(error) => write!(f, "{}", error),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(error: io::Error) -> Self {
        ImportError::IO(error)
    }
}

impl From<ValueError> for ImportError {
    fn from(error: ValueError) -> Self {
        ImportError::Parse(error)
    }
}
