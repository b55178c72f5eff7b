//! # Upper triangular matrices
//!
//! A `TriangularMatrix` of size `n` owns `n` rows. Row `i` is a `Vector` of length `n - i` whose
//! logical indices start at `i`, so only the columns `i <= j < n` exist. Entries below the
//! diagonal have no storage at all.
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, Index, IndexMut, Sub};
use std::slice::Iter;

use itertools::Itertools;
use log::debug;
use num_traits::Zero;

use crate::data::linear_algebra::MAX_MATRIX_SIZE;
use crate::data::linear_algebra::error::Error;
use crate::data::linear_algebra::vector::{checked_len, Vector};

/// Size of a matrix created through `Default`.
const DEFAULT_SIZE: usize = 10;

/// Square matrix storing only the values on and above the diagonal.
#[derive(Debug)]
pub struct TriangularMatrix<F> {
    rows: Vector<Vector<F>>,
}

impl<F: Zero + Clone> TriangularMatrix<F> {
    /// Create a matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of rows and columns, at most `MAX_MATRIX_SIZE`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `size` is negative or too large.
    pub fn new(size: isize) -> Result<Self, Error> {
        let size = checked_len(size)?;
        if size > MAX_MATRIX_SIZE {
            return Err(Error::invalid_argument(format!(
                "matrix size {} exceeds the maximum of {}", size, MAX_MATRIX_SIZE,
            )));
        }

        Ok(Self::zeros(size))
    }

    fn zeros(size: usize) -> Self {
        debug!("Creating upper triangular matrix of size {}", size);

        let rows = (0..size).map(|i| Vector::zeros(size - i, i)).collect::<Vec<_>>();
        Self { rows: Vector::from_validated(rows, 0) }
    }
}

impl<F> TriangularMatrix<F> {
    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Row `i`, holding columns `i..size`.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if there is no row `i`.
    pub fn row(&self, i: isize) -> Result<&Vector<F>, Error> {
        self.rows.get(i)
    }

    /// Mutable access to row `i`.
    ///
    /// The row can be written to, but not replaced, so the shape of the matrix is preserved.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if there is no row `i`.
    pub fn row_mut(&mut self, i: isize) -> Result<RowMut<'_, F>, Error> {
        self.rows.get_mut(i).map(RowMut)
    }

    /// Value at row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if `i` is not a row, or `j` is not in `i..size`.
    pub fn get(&self, i: isize, j: isize) -> Result<&F, Error> {
        self.row(i)?.get(j)
    }

    /// Mutable reference to the value at row `i`, column `j`.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if `i` is not a row, or `j` is not in `i..size`.
    pub fn get_mut(&mut self, i: isize, j: isize) -> Result<&mut F, Error> {
        self.rows.get_mut(i)?.get_mut(j)
    }

    /// Iterate over the rows, starting with the longest one.
    pub fn rows(&self) -> Iter<'_, Vector<F>> {
        self.rows.iter()
    }

    /// Iterate mutably over the rows, for filling them in place.
    pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = RowMut<'_, F>> {
        self.rows.iter_mut().map(RowMut)
    }

    /// Give up the triangular structure and take out the rows.
    pub fn into_rows(self) -> Vector<Vector<F>> {
        self.rows
    }

    /// Combine rows with the same index in both matrices.
    fn zip_rows(
        &self,
        other: &Self,
        f: impl Fn(&Vector<F>, &Vector<F>) -> Result<Vector<F>, Error>,
    ) -> Result<Self, Error> {
        if self.size() != other.size() {
            return Err(Error::SizeMismatch { left: self.size(), right: other.size() });
        }

        let rows = self.rows.iter()
            .zip_eq(other.rows.iter())
            .map(|(left, right)| f(left, right))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows: Vector::from_values(rows, self.rows.start_index())? })
    }
}

impl<F: Clone + Add<Output = F>> TriangularMatrix<F> {
    /// Sum of two matrices of the same size.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` if the sizes differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error> {
        self.zip_rows(other, |left, right| left.try_add(right))
    }
}

impl<F: Clone + Sub<Output = F>> TriangularMatrix<F> {
    /// Difference of two matrices of the same size.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` if the sizes differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error> {
        self.zip_rows(other, |left, right| left.try_sub(right))
    }
}

/// Mutable access to a single row of a `TriangularMatrix`.
///
/// Elements can be changed, but the row can't be assigned a vector of another shape.
#[derive(Debug)]
pub struct RowMut<'a, F>(&'a mut Vector<F>);

impl<F> RowMut<'_, F> {
    /// Mutable reference to the value in column `j`.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if `j` is not a column of this row.
    pub fn get_mut(&mut self, j: isize) -> Result<&mut F, Error> {
        self.0.get_mut(j)
    }

    /// Iterate mutably over the values of the row.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, F> {
        self.0.iter_mut()
    }
}

impl<F> std::ops::Deref for RowMut<'_, F> {
    type Target = Vector<F>;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl<F> Index<usize> for RowMut<'_, F> {
    type Output = F;

    fn index(&self, j: usize) -> &Self::Output {
        &self.0[j]
    }
}

impl<F> IndexMut<usize> for RowMut<'_, F> {
    fn index_mut(&mut self, j: usize) -> &mut Self::Output {
        &mut self.0[j]
    }
}

/// Lift a vector of rows into a matrix.
///
/// The rows are checked to have the upper triangular shape: the outer vector starts at index
/// zero and row `i` has length `n - i` and starts at index `i`.
impl<F> TryFrom<Vector<Vector<F>>> for TriangularMatrix<F> {
    type Error = Error;

    fn try_from(rows: Vector<Vector<F>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        if size > MAX_MATRIX_SIZE {
            return Err(Error::invalid_argument(format!(
                "matrix size {} exceeds the maximum of {}", size, MAX_MATRIX_SIZE,
            )));
        }
        if rows.start_index() != 0 {
            return Err(Error::invalid_argument(format!(
                "rows are indexed from {} instead of 0", rows.start_index(),
            )));
        }
        if let Some((i, row)) = rows.iter().enumerate()
            .find(|&(i, row)| row.len() != size - i || row.start_index() != i) {
            return Err(Error::invalid_argument(format!(
                "row {} has length {} starting at {}, expected length {} starting at {}",
                i, row.len(), row.start_index(), size - i, i,
            )));
        }

        Ok(Self { rows })
    }
}

impl<F: Zero + Clone> Default for TriangularMatrix<F> {
    fn default() -> Self {
        Self::zeros(DEFAULT_SIZE)
    }
}

impl<F: Clone> Clone for TriangularMatrix<F> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone() }
    }

    /// Assignment, reusing the storage of rows that keep their length.
    fn clone_from(&mut self, source: &Self) {
        self.rows.clone_from(&source.rows);
    }
}

#[allow(clippy::partialeq_ne_impl)]
impl<F: PartialEq> PartialEq for TriangularMatrix<F> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }

    fn ne(&self, other: &Self) -> bool {
        self.rows != other.rows
    }
}

impl<F: Eq> Eq for TriangularMatrix<F> {}

/// Row access, such that `matrix[i][j]` reads the value at row `i`, column `j`.
///
/// # Panics
///
/// When `i` is not a row or `j` not a column of row `i`.
impl<F> Index<usize> for TriangularMatrix<F> {
    type Output = Vector<F>;

    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

/// Value at row `i`, column `j`.
///
/// # Panics
///
/// When `i` is not a row or `j` not a column of row `i`.
impl<F> Index<(usize, usize)> for TriangularMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.rows[i][j]
    }
}

/// Write access to single values, such that `matrix[(i, j)] = value` works.
///
/// Rows are never handed out mutably, so the shape of the matrix can't be changed.
///
/// # Panics
///
/// When `i` is not a row or `j` not a column of row `i`.
impl<F> IndexMut<(usize, usize)> for TriangularMatrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[i][j]
    }
}

/// One row per line, each line holding only the stored columns.
impl<F: Display> Display for TriangularMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows.iter() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
