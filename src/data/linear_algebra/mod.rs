//! # Linear algebra primitives
//!
//! Dense vectors with an index offset, and upper triangular matrices built out of them.

pub mod error;
pub mod matrix;
pub mod vector;

/// Largest number of elements a single `Vector` may hold.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Largest number of rows (and columns) of a `TriangularMatrix`.
pub const MAX_MATRIX_SIZE: usize = 10_000;
