//! Dense real vectors.
//!
//! A [`Vector`] owns an ordered sequence of scalars. Arithmetic never touches its
//! operands and always returns a fresh vector; the mutation helpers (`push`,
//! `remove_*`, `clear`) are the only way a vector changes after construction.
//!
//! Equality is approximate: two vectors are equal when they have the same length
//! and every pair of components differs by less than `1e-5` in absolute value.

use std::fmt;
use std::ops::Index;

use approx::AbsDiffEq;
use num_traits::Float;

use crate::config::{CompareOptions, FormatOptions};
use crate::core::traits::Indexing;
use crate::error::LinalgError;
use crate::utils::format::fixed_half_up;

/// An ordered sequence of real values.
#[derive(Clone, Debug, Default)]
pub struct Vector<T> {
    values: Vec<T>,
}

impl<T: Float> Vector<T> {
    /// An empty vector.
    pub fn new() -> Self {
        Vector { values: Vec::new() }
    }

    /// A vector of `len` zeros.
    pub fn zeros(len: usize) -> Self {
        Vector { values: vec![T::zero(); len] }
    }

    /// Copy the given values into a new vector.
    pub fn from_slice(values: &[T]) -> Self {
        Vector { values: values.to_vec() }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn extend_from_slice(&mut self, values: &[T]) {
        self.values.extend_from_slice(values);
    }

    /// Remove the first component identical to `value`. Returns whether one was found.
    ///
    /// Matching is by identity rather than IEEE `==`: `NaN` matches `NaN`, and
    /// `-0.0` does not match `0.0`.
    pub fn remove_first(&mut self, value: T) -> bool {
        match self.values.iter().position(|&v| same_value(v, value)) {
            Some(pos) => {
                self.values.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every component identical to `value`, matched as in [`Vector::remove_first`].
    pub fn remove_all_matching(&mut self, value: T) {
        self.values.retain(|&v| !same_value(v, value));
    }

    pub fn remove_index(&mut self, index: usize) -> Result<T, LinalgError> {
        if index >= self.values.len() {
            return Err(LinalgError::IndexOutOfBounds { index, len: self.values.len() });
        }
        Ok(self.values.remove(index))
    }

    /// Remove the components at `start..=end`.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<(), LinalgError> {
        let len = self.values.len();
        if start > end || end >= len {
            return Err(LinalgError::InvalidRange { start, end, len });
        }
        self.values.drain(start..=end);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Component-wise sum. Both vectors must have the same length.
    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        self.zip_with(other, "Addition of different sized vectors.", |a, b| a + b)
    }

    /// Component-wise difference `self - other`. Both vectors must have the same length.
    pub fn subtract(&self, other: &Vector<T>) -> Result<Vector<T>, LinalgError> {
        self.zip_with(other, "Subtraction of different sized vectors.", |a, b| a - b)
    }

    /// Multiply every component by `scalar`.
    pub fn scale(&self, scalar: T) -> Vector<T> {
        self.values.iter().map(|&v| scalar * v).collect()
    }

    /// Inner product `Σ aᵢ·bᵢ`, accumulated left to right.
    pub fn dot(&self, other: &Vector<T>) -> Result<T, LinalgError> {
        if self.len() != other.len() {
            return Err(LinalgError::SizeMismatch("Dot product of different sized vectors."));
        }
        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Approximate equality with a caller-chosen tolerance.
    pub fn approx_eq_with(&self, other: &Vector<T>, opts: &CompareOptions) -> bool {
        let eps = num_traits::cast(opts.epsilon).unwrap_or_else(T::epsilon);
        self.within(other, eps)
    }

    /// Render with a caller-chosen number of fractional digits.
    pub fn display_with(&self, opts: &FormatOptions) -> String {
        if self.values.is_empty() {
            return "( )".to_string();
        }
        let parts: Vec<String> = self
            .values
            .iter()
            .map(|&v| fixed_half_up(v, opts.precision))
            .collect();
        format!("( {} )", parts.join(" , "))
    }

    fn within(&self, other: &Vector<T>, eps: T) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.len() == other.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(&a, &b)| (a - b).abs() < eps)
    }

    fn zip_with(
        &self,
        other: &Vector<T>,
        msg: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<Vector<T>, LinalgError> {
        if self.len() != other.len() {
            return Err(LinalgError::SizeMismatch(msg));
        }
        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }
}

impl<T: Float> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.within(other, default_tolerance())
    }
}

impl<T: Float> AbsDiffEq for Vector<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        default_tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.within(other, epsilon)
    }
}

fn same_value<T: Float>(a: T, b: T) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    a == b && a.is_sign_negative() == b.is_sign_negative()
}

pub(crate) fn default_tolerance<T: Float>() -> T {
    num_traits::cast(crate::config::DEFAULT_EPSILON).unwrap_or_else(T::epsilon)
}

impl<T: Float> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&FormatOptions::default()))
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(values: Vec<T>) -> Self {
        Vector { values }
    }
}

impl<T: Copy> From<&[T]> for Vector<T> {
    fn from(values: &[T]) -> Self {
        Vector { values: values.to_vec() }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector { values: iter.into_iter().collect() }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

impl<T> Indexing for Vector<T> {
    fn nrows(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(values: &[f64]) -> Vector<f64> {
        Vector::from_slice(values)
    }

    #[test]
    fn add_mismatch_reports_operation() {
        let err = v(&[15.0, 20.0, 25.0]).add(&v(&[5.0, 10.0])).unwrap_err();
        assert_eq!(err, LinalgError::SizeMismatch("Addition of different sized vectors."));
        assert_eq!(err.to_string(), "Addition of different sized vectors.");
        assert_eq!(err.message(), Some("Addition of different sized vectors."));
    }

    #[test]
    fn add_componentwise() {
        let sum = v(&[15.0, 20.0, 25.0]).add(&v(&[5.0, 10.0, 15.0])).unwrap();
        assert_eq!(sum, v(&[20.0, 30.0, 40.0]));
        let wrong = v(&[1.0, 2.0]).add(&v(&[-7.0, -11.0])).unwrap();
        assert_ne!(wrong, v(&[-6.0, -5.0]));
    }

    #[test]
    fn subtract_componentwise() {
        let a = v(&[-7.5, 0.0, 447.3, -50.2]);
        let b = v(&[0.0, -77.3, 591.8, -66123.1]);
        assert_eq!(a.subtract(&b).unwrap(), v(&[-7.5, 77.3, -144.5, 66072.9]));
        assert_eq!(
            v(&[0.0]).subtract(&v(&[1.0, 2.0])).unwrap_err().to_string(),
            "Subtraction of different sized vectors."
        );
    }

    #[test]
    fn scale_every_component() {
        let a = v(&[334.9, 0.8, -25.0, 8214.7, -2.6]);
        let expected = v(&[-26557.57, -63.44, 1982.5, -651425.71, 206.18]);
        assert_eq!(a.scale(-79.3), expected);
    }

    #[test]
    fn dot_product() {
        let a = v(&[76735.5, -0.1, 44.9, -504.9, -5803.1]);
        let b = v(&[0.0, -7.1, 50145.8, 123.4, 0.0]);
        approx::assert_abs_diff_eq!(a.dot(&b).unwrap(), 2189242.47, epsilon = 1e-5);
        assert_eq!(
            v(&[0.0]).dot(&v(&[1.0, 2.0])).unwrap_err().to_string(),
            "Dot product of different sized vectors."
        );
    }

    #[test]
    fn equality_uses_absolute_tolerance() {
        assert_eq!(v(&[1.0, 2.0]), v(&[1.000009, 1.999991]));
        assert_ne!(v(&[1.0, 2.0]), v(&[1.00001, 2.0]));
        assert_ne!(v(&[1.0]), v(&[1.0, 0.0]));
        assert!(v(&[1.0]).approx_eq_with(&v(&[1.4]), &CompareOptions { epsilon: 0.5 }));
    }

    #[test]
    fn removal_helpers() {
        let mut a = v(&[1.0, 2.0, 3.0, 2.0, 5.0, 6.0]);
        assert!(a.remove_first(2.0));
        assert_eq!(a.values(), &[1.0, 3.0, 2.0, 5.0, 6.0]);
        assert!(!a.remove_first(9.0));
        a.remove_all_matching(2.0);
        assert_eq!(a.values(), &[1.0, 3.0, 5.0, 6.0]);
        a.remove_range(1, 2).unwrap();
        assert_eq!(a.values(), &[1.0, 6.0]);
        assert_eq!(a.remove_index(1).unwrap(), 6.0);
        assert_eq!(
            a.remove_index(3),
            Err(LinalgError::IndexOutOfBounds { index: 3, len: 1 })
        );
        assert_eq!(
            a.remove_range(0, 1),
            Err(LinalgError::InvalidRange { start: 0, end: 1, len: 1 })
        );
        a.clear();
        assert!(a.is_empty());
    }

    #[test]
    fn removal_matches_nan_and_signed_zero_by_identity() {
        let mut a = v(&[f64::NAN, 0.0, -0.0, 1.0, f64::NAN]);
        assert!(a.remove_first(-0.0));
        assert_eq!(a.len(), 4);
        assert!(a[1].is_sign_positive());
        assert!(!a.remove_first(-0.0));
        a.remove_all_matching(f64::NAN);
        assert_eq!(a.len(), 2);
        assert!(a.iter().all(|x| !x.is_nan()));
        a.remove_all_matching(0.0);
        assert_eq!(a.values(), &[1.0]);
    }

    #[test]
    fn display_rounds_half_up() {
        assert_eq!(v(&[1.0, -0.5, 2.03125]).to_string(), "( 1.0000 , -0.5000 , 2.0313 )");
        assert_eq!(Vector::<f64>::new().to_string(), "( )");
        assert_eq!(v(&[1.25]).display_with(&FormatOptions { precision: 1 }), "( 1.3 )");
        // stored just below the midpoint
        assert_eq!(v(&[0.30005, 1234.56785]).to_string(), "( 0.3000 , 1234.5678 )");
    }
}
