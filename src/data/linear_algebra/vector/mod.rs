//! # Vectors with an index offset
//!
//! A `Vector` holds a fixed number of values, addressed by logical indices that start at
//! `start_index` rather than at zero. The length can only change through assignment
//! (`Clone::clone_from`) from a vector of a different length.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use itertools::Itertools;
use log::{debug, trace};
use num_traits::Zero;

use crate::data::linear_algebra::MAX_VECTOR_SIZE;
use crate::data::linear_algebra::error::Error;

mod ops;

/// Length of a vector created through `Default`.
const DEFAULT_LEN: usize = 10;

/// Uses a boxed slice as the underlying data structure. Length is fixed at creation.
///
/// The value at logical index `k` is stored at position `k - start_index`.
#[derive(Debug)]
pub struct Vector<F> {
    data: Box<[F]>,
    start_index: usize,
}

impl<F: Zero + Clone> Vector<F> {
    /// Create a vector with all values being zero.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, at most `MAX_VECTOR_SIZE`.
    /// * `start_index`: Logical index of the first element.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `len` is negative or too large, or if `start_index` is
    /// negative.
    pub fn new(len: isize, start_index: isize) -> Result<Self, Error> {
        let len = checked_len(len)?;
        let start_index = usize::try_from(start_index)
            .map_err(|_| Error::invalid_argument(format!("negative start index {}", start_index)))?;
        check_end_index(start_index, len)?;

        Ok(Self::zeros(len, start_index))
    }

    /// Create a vector of zeros from an already validated length and start index.
    pub(crate) fn zeros(len: usize, start_index: usize) -> Self {
        debug_assert!(len <= MAX_VECTOR_SIZE);

        trace!("Allocating vector of length {} starting at {}", len, start_index);
        Self { data: vec![F::zero(); len].into_boxed_slice(), start_index }
    }
}

impl<F> Vector<F> {
    /// Wrap existing values in a vector.
    ///
    /// # Arguments
    ///
    /// * `values`: Values in order of increasing logical index.
    /// * `start_index`: Logical index of the first value.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if there are more than `MAX_VECTOR_SIZE` values, or the last
    /// logical index would not be representable.
    pub fn from_values(values: Vec<F>, start_index: usize) -> Result<Self, Error> {
        if values.len() > MAX_VECTOR_SIZE {
            return Err(Error::invalid_argument(format!(
                "vector length {} exceeds the maximum of {}", values.len(), MAX_VECTOR_SIZE,
            )));
        }
        check_end_index(start_index, values.len())?;

        Ok(Self { data: values.into_boxed_slice(), start_index })
    }

    /// Wrap values of which the length and start index are known to be valid.
    pub(crate) fn from_validated(values: Vec<F>, start_index: usize) -> Self {
        debug_assert!(values.len() <= MAX_VECTOR_SIZE);

        Self { data: values.into_boxed_slice(), start_index }
    }

    /// Number of elements stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector stores no elements at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical index of the first element.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// One past the last valid logical index.
    pub fn end_index(&self) -> usize {
        self.start_index + self.len()
    }

    /// Retrieve the value at a logical index.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if `index` is not in `[start_index, start_index + len)`.
    pub fn get(&self, index: isize) -> Result<&F, Error> {
        let offset = self.offset(index)?;
        Ok(&self.data[offset])
    }

    /// Mutable reference to the value at a logical index.
    ///
    /// # Errors
    ///
    /// `Error::IndexOutOfRange` if `index` is not in `[start_index, start_index + len)`.
    pub fn get_mut(&mut self, index: isize) -> Result<&mut F, Error> {
        let offset = self.offset(index)?;
        Ok(&mut self.data[offset])
    }

    /// Iterate over the values in order of increasing logical index.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// Iterate mutably over the values in order of increasing logical index.
    pub fn iter_mut(&mut self) -> IterMut<'_, F> {
        self.data.iter_mut()
    }

    /// Iterate over (logical index, value) pairs.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &F)> {
        (self.start_index..).zip(self.data.iter())
    }

    /// The stored values, without their offset.
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    /// Take the stored values out of this vector.
    pub fn into_values(self) -> Vec<F> {
        self.data.into_vec()
    }

    /// Physical position of a logical index.
    fn offset(&self, index: isize) -> Result<usize, Error> {
        usize::try_from(index).ok()
            .and_then(|index| index.checked_sub(self.start_index))
            .filter(|&offset| offset < self.data.len())
            .ok_or(Error::IndexOutOfRange { index, start_index: self.start_index, len: self.len() })
    }

    /// Physical position of a logical index, for the panicking `Index` implementations.
    fn offset_or_panic(&self, index: usize) -> usize {
        match index.checked_sub(self.start_index).filter(|&offset| offset < self.data.len()) {
            Some(offset) => offset,
            None => panic!(
                "Index {} out of range, valid indices are {}..{}",
                index, self.start_index, self.end_index(),
            ),
        }
    }
}

/// Validate a requested length.
pub(crate) fn checked_len(len: isize) -> Result<usize, Error> {
    usize::try_from(len).ok()
        .filter(|&len| len <= MAX_VECTOR_SIZE)
        .ok_or_else(|| Error::invalid_argument(format!(
            "vector length {} is not in 0..={}", len, MAX_VECTOR_SIZE,
        )))
}

/// All logical indices must be representable as an `isize`, the type used for checked access.
fn check_end_index(start_index: usize, len: usize) -> Result<(), Error> {
    if start_index.checked_add(len).is_none_or(|end| end > isize::MAX as usize) {
        Err(Error::invalid_argument(format!(
            "start index {} is too large for {} elements", start_index, len,
        )))
    } else {
        Ok(())
    }
}

impl<F: Zero + Clone> Default for Vector<F> {
    fn default() -> Self {
        Self::zeros(DEFAULT_LEN, 0)
    }
}

impl<F: Clone> Clone for Vector<F> {
    fn clone(&self) -> Self {
        Self { data: self.data.clone(), start_index: self.start_index }
    }

    /// Assignment.
    ///
    /// The start index is always taken over. Storage is only reallocated when the lengths differ,
    /// otherwise every element is overwritten in place (recursively, for vectors of vectors).
    fn clone_from(&mut self, source: &Self) {
        self.start_index = source.start_index;
        if self.data.len() == source.data.len() {
            for (target, value) in self.data.iter_mut().zip(source.data.iter()) {
                target.clone_from(value);
            }
        } else {
            debug!("Reallocating vector of length {} to length {}", self.len(), source.len());
            self.data = source.data.clone();
        }
    }
}

/// The start index is not compared, only the lengths and the values.
#[allow(clippy::partialeq_ne_impl)]
impl<F: PartialEq> PartialEq for Vector<F> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.data.iter().zip(other.data.iter()).all(|(a, b)| a == b)
    }

    fn ne(&self, other: &Self) -> bool {
        self.len() != other.len() || self.data.iter().zip(other.data.iter()).any(|(a, b)| a != b)
    }
}

impl<F: Eq> Eq for Vector<F> {}

impl<F> Index<usize> for Vector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        let offset = self.offset_or_panic(index);
        &self.data[offset]
    }
}

impl<F> IndexMut<usize> for Vector<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let offset = self.offset_or_panic(index);
        &mut self.data[offset]
    }
}

impl<'a, F> IntoIterator for &'a Vector<F> {
    type Item = &'a F;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Values separated by a single space, without a trailing separator or newline.
impl<F: Display> Display for Vector<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().format(" "))
    }
}
