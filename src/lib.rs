//! # Offset vectors and upper triangular matrices
//!
//! Two generic containers with value semantics. A `Vector` is a fixed length sequence whose
//! logical indices start at an arbitrary offset; a `TriangularMatrix` stores only the entries on
//! and above the diagonal by keeping, for each row `i`, a `Vector` of length `n - i` starting at
//! index `i`.
#![warn(missing_docs)]

pub mod data;
pub mod io;

pub use data::linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
pub use data::linear_algebra::error::Error;
pub use data::linear_algebra::matrix::TriangularMatrix;
pub use data::linear_algebra::vector::Vector;
