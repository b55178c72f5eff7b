//! # Error reporting for vector and matrix operations
//!
//! Every fallible operation in this crate returns an `Error`. The variant tells what kind of
//! problem was encountered, such that callers (and tests) can distinguish a bad construction
//! request from a bad index or incompatible operands.
use std::error;
use std::fmt;

/// An `Error` is created when an operation on a vector or matrix can't be completed.
///
/// No operation recovers from these internally, they are all returned to the caller as is.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A length or start index passed at construction is negative or too large, or a collection
    /// of rows does not have the upper triangular shape.
    ///
    /// The contained `String` is a message for the end user.
    InvalidArgument(String),
    /// A logical index outside of `[start_index, start_index + len)` was accessed.
    IndexOutOfRange {
        /// The index that was requested.
        index: isize,
        /// First valid logical index.
        start_index: usize,
        /// Number of elements stored.
        len: usize,
    },
    /// The operands of a binary operation don't have the same length.
    SizeMismatch {
        /// Length of the left hand side.
        left: usize,
        /// Length of the right hand side.
        right: usize,
    },
    /// Text could not be read into a vector or matrix.
    ///
    /// # Note
    ///
    /// Reading is the only operation that may leave a value partially modified: elements read
    /// before the failing token keep their new value.
    Parse(String),
}

impl Error {
    pub(crate) fn invalid_argument(description: impl Into<String>) -> Self {
        Error::InvalidArgument(description.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidArgument(description) => write!(f, "Invalid argument: {}", description),
            Error::IndexOutOfRange { index, start_index, len } => write!(
                f,
                "Index {} out of range, valid indices are {}..{}",
                index, start_index, start_index + len,
            ),
            Error::SizeMismatch { left, right } => write!(
                f, "Sizes differ: left hand side has {} elements, right hand side {}", left, right,
            ),
            Error::Parse(description) => write!(f, "ParseError: {}", description),
        }
    }
}

impl error::Error for Error {}
