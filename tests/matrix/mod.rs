//! # Triangular matrices used as a user of the crate would
use std::path::{Path, PathBuf};

use upper_triangular::TriangularMatrix;


/// Folder containing the matrix text files.
///
/// The path is relative to the project root folder.
fn matrix_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Matrix with `f(i, j)` at row `i`, column `j` for all `j >= i`.
fn filled(size: usize, f: impl Fn(usize, usize) -> i32) -> TriangularMatrix<i32> {
    let mut matrix = TriangularMatrix::new(size as isize).unwrap();
    for i in 0..matrix.size() {
        for j in i..matrix.size() {
            matrix[(i, j)] = f(i, j);
        }
    }
    matrix
}
