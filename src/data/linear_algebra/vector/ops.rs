//! # Arithmetic on vectors
//!
//! Operations with a scalar never fail. Operations between two vectors require equal lengths; the
//! start indices of the operands are not compared.
use std::ops::{Add, Mul, Sub};

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_algebra::error::Error;
use crate::data::linear_algebra::vector::Vector;

impl<F> Vector<F> {
    /// Apply a function to each element, creating a new vector with the same start index.
    fn map(&self, f: impl FnMut(&F) -> F) -> Self {
        Self { data: self.data.iter().map(f).collect(), start_index: self.start_index }
    }

    /// Combine elements with the same position in both vectors.
    ///
    /// The result takes the start index of `self`.
    fn zip_map(&self, other: &Self, mut f: impl FnMut(&F, &F) -> F) -> Result<Self, Error> {
        self.check_same_len(other)?;

        let data = self.data.iter()
            .zip_eq(other.data.iter())
            .map(|(left, right)| f(left, right))
            .collect();
        Ok(Self { data, start_index: self.start_index })
    }

    fn check_same_len(&self, other: &Self) -> Result<(), Error> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(Error::SizeMismatch { left: self.len(), right: other.len() })
        }
    }
}

impl<F: Clone + Add<Output = F>> Vector<F> {
    /// Add a scalar to every element.
    pub fn add_scalar(&self, value: &F) -> Self {
        self.map(|x| x.clone() + value.clone())
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` if the lengths differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error> {
        self.zip_map(other, |left, right| left.clone() + right.clone())
    }
}

impl<F: Clone + Sub<Output = F>> Vector<F> {
    /// Subtract a scalar from every element.
    pub fn sub_scalar(&self, value: &F) -> Self {
        self.map(|x| x.clone() - value.clone())
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` if the lengths differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error> {
        self.zip_map(other, |left, right| left.clone() - right.clone())
    }
}

impl<F: Clone + Mul<Output = F>> Vector<F> {
    /// Multiply every element by a scalar.
    pub fn mul_scalar(&self, value: &F) -> Self {
        self.map(|x| x.clone() * value.clone())
    }
}

impl<F: Zero + Clone + Mul<Output = F>> Vector<F> {
    /// Inner product.
    ///
    /// The products are accumulated starting from zero, in order of increasing index.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` if the lengths differ.
    pub fn dot(&self, other: &Self) -> Result<F, Error> {
        self.check_same_len(other)?;

        Ok(self.data.iter()
            .zip_eq(other.data.iter())
            .fold(F::zero(), |total, (left, right)| total + left.clone() * right.clone()))
    }
}

impl<F: Clone + Add<Output = F>> Add<F> for &Vector<F> {
    type Output = Vector<F>;

    fn add(self, rhs: F) -> Self::Output {
        self.add_scalar(&rhs)
    }
}

impl<F: Clone + Sub<Output = F>> Sub<F> for &Vector<F> {
    type Output = Vector<F>;

    fn sub(self, rhs: F) -> Self::Output {
        self.sub_scalar(&rhs)
    }
}

impl<F: Clone + Mul<Output = F>> Mul<F> for &Vector<F> {
    type Output = Vector<F>;

    fn mul(self, rhs: F) -> Self::Output {
        self.mul_scalar(&rhs)
    }
}
