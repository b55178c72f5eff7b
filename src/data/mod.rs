//! # Storing of vectors and matrices in memory
//!
//! This module provides the data structures. Reading them from and writing them to text lives in
//! the `io` module.

pub mod linear_algebra;
