//! Dense row-ordered matrices on top of Faer.
//!
//! A [`Matrix`] is a sequence of rows of equal length, stored in one owned
//! `faer::Mat<T>` buffer. Construction rejects ragged input instead of silently
//! dropping it, and every arithmetic operation returns a new matrix.
//!
//! A matrix with zero rows is the empty matrix; it reports zero columns.
//!
//! # Usage
//! ```
//! use cofactor::Matrix;
//!
//! let m = Matrix::from_rows(&[[4.0, 2.0], [2.0, 3.0]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), 8.0);
//! let l = m.cholesky().unwrap();
//! assert_eq!(l.multiply_matrix(&l.transpose()).unwrap(), m);
//! ```

use std::fmt;
use std::ops::Index;

use approx::AbsDiffEq;
use bitflags::bitflags;
use faer::Mat;
use num_traits::Float;

use crate::config::{CompareOptions, FormatOptions};
use crate::core::traits::{MatShape, MatrixGet};
use crate::error::LinalgError;
use crate::matrix::vector::{default_tolerance, Vector};
use crate::solver::{cholesky, determinant, inverse};

bitflags! {
    /// Structural properties reported by [`Matrix::structure`].
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Structure: u32 {
        const EMPTY            = 0b0000_0001;
        const SQUARE           = 0b0000_0010;
        const SYMMETRIC        = 0b0000_0100; // within the default tolerance
        const LOWER_TRIANGULAR = 0b0000_1000; // exact zeros above the diagonal
        const UPPER_TRIANGULAR = 0b0001_0000; // exact zeros below the diagonal
        const DIAGONAL         = Self::LOWER_TRIANGULAR.bits() | Self::UPPER_TRIANGULAR.bits();
    }
}

/// Dense matrix of real values.
#[derive(Clone)]
pub struct Matrix<T> {
    data: Mat<T>,
}

impl<T: Float> Matrix<T> {
    /// The empty matrix (no rows).
    pub fn new() -> Self {
        Self::from_fn(0, 0, |_, _| T::zero())
    }

    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| T::zero())
    }

    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Build an `nrows x ncols` matrix from `f(i, j)`.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl FnMut(usize, usize) -> T) -> Self {
        let ncols = if nrows == 0 { 0 } else { ncols };
        Matrix {
            data: Mat::from_fn(nrows, ncols, f),
        }
    }

    /// Copy the given rows into a new matrix.
    ///
    /// # Errors
    /// `SizeMismatch` if the rows do not all have the same length.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, LinalgError> {
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != ncols) {
            return Err(LinalgError::SizeMismatch(
                "Construction of matrix from different sized rows.",
            ));
        }
        Ok(Self::from_fn(rows.len(), ncols, |i, j| rows[i].as_ref()[j]))
    }

    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.nrows() == 0
    }

    /// Non-empty with as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.nrows() > 0 && self.nrows() == self.ncols()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<T> {
        (i < self.nrows() && j < self.ncols()).then(|| self.data[(i, j)])
    }

    /// A copy of row `i`.
    pub fn row(&self, i: usize) -> Option<Vector<T>> {
        (i < self.nrows()).then(|| (0..self.ncols()).map(|j| self.data[(i, j)]).collect())
    }

    /// A copy of column `j`.
    pub fn column(&self, j: usize) -> Option<Vector<T>> {
        (j < self.ncols()).then(|| (0..self.nrows()).map(|i| self.data[(i, j)]).collect())
    }

    /// Iterate over copies of the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vector<T>> + '_ {
        (0..self.nrows())
            .map(move |i| (0..self.ncols()).map(|j| self.data[(i, j)]).collect::<Vector<T>>())
    }

    /// Borrow the underlying Faer storage.
    pub fn as_mat(&self) -> &Mat<T> {
        &self.data
    }

    /// Append a copy of `row`. The first row of an empty matrix fixes the column count.
    pub fn push_row(&mut self, row: impl AsRef<[T]>) -> Result<(), LinalgError> {
        self.extend_rows(&[row])
    }

    /// Append copies of all `rows`, or none of them if any has the wrong length.
    pub fn extend_rows<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<(), LinalgError> {
        let Some(first) = rows.first() else {
            return Ok(());
        };
        let ncols = if self.is_empty() {
            first.as_ref().len()
        } else {
            self.ncols()
        };
        if rows.iter().any(|r| r.as_ref().len() != ncols) {
            return Err(LinalgError::SizeMismatch(
                "Appending row of different size than the matrix's rows.",
            ));
        }
        let old = self.nrows();
        let grown = Self::from_fn(old + rows.len(), ncols, |i, j| {
            if i < old {
                self.data[(i, j)]
            } else {
                rows[i - old].as_ref()[j]
            }
        });
        *self = grown;
        Ok(())
    }

    /// Remove row `i` and return it.
    pub fn remove_row(&mut self, i: usize) -> Result<Vector<T>, LinalgError> {
        let removed = self.row(i).ok_or(LinalgError::IndexOutOfBounds {
            index: i,
            len: self.nrows(),
        })?;
        self.drop_rows(i, i);
        Ok(removed)
    }

    /// Remove rows `start..=end`.
    pub fn remove_rows(&mut self, start: usize, end: usize) -> Result<(), LinalgError> {
        let len = self.nrows();
        if start > end || end >= len {
            return Err(LinalgError::InvalidRange { start, end, len });
        }
        self.drop_rows(start, end);
        Ok(())
    }

    fn drop_rows(&mut self, start: usize, end: usize) {
        let removed = end - start + 1;
        let shrunk = Self::from_fn(self.nrows() - removed, self.ncols(), |i, j| {
            if i < start {
                self.data[(i, j)]
            } else {
                self.data[(i + removed, j)]
            }
        });
        *self = shrunk;
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[(i, j)] = value;
    }

    /// Element-wise sum. Both matrices must have the same shape.
    pub fn add_matrix(&self, other: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        self.zip_with(other, "Addition of different sized matrices.", |a, b| a + b)
    }

    /// Element-wise difference `self - other`. Both matrices must have the same shape.
    pub fn subtract_matrix(&self, other: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        self.zip_with(other, "Subtraction of different sized matrices.", |a, b| a - b)
    }

    /// Matrix product `self · other`.
    ///
    /// # Errors
    /// `SizeMismatch` unless `self.ncols() == other.nrows()`.
    pub fn multiply_matrix(&self, other: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        if self.ncols() != other.nrows() {
            return Err(LinalgError::SizeMismatch(
                "Multiplication of matrices where the first matrix's column count isn't equal to the second's row count.",
            ));
        }
        let inner = self.ncols();
        Ok(Self::from_fn(self.nrows(), other.ncols(), |i, j| {
            (0..inner).fold(T::zero(), |acc, k| acc + self.data[(i, k)] * other.data[(k, j)])
        }))
    }

    pub fn scale(&self, scalar: T) -> Matrix<T> {
        Self::from_fn(self.nrows(), self.ncols(), |i, j| scalar * self.data[(i, j)])
    }

    /// Rows become columns: `result(i, j) = self(j, i)`.
    pub fn transpose(&self) -> Matrix<T> {
        Self::from_fn(self.ncols(), self.nrows(), |i, j| self.data[(j, i)])
    }

    /// Cofactor expansion along the first row. See [`determinant::determinant`].
    pub fn determinant(&self) -> Result<T, LinalgError> {
        determinant::determinant(self)
    }

    /// Adjugate over determinant. See [`inverse::inverse`].
    pub fn inverse(&self) -> Result<Matrix<T>, LinalgError> {
        inverse::inverse(self)
    }

    /// Lower-triangular `L` with `self = L·Lᵀ`. See [`cholesky::cholesky`].
    pub fn cholesky(&self) -> Result<Matrix<T>, LinalgError> {
        cholesky::cholesky(self)
    }

    pub fn structure(&self) -> Structure {
        if self.is_empty() {
            return Structure::EMPTY;
        }
        let mut flags = Structure::empty();
        if !self.is_square() {
            return flags;
        }
        flags |= Structure::SQUARE;
        if cholesky::is_symmetric(self, default_tolerance()) {
            flags |= Structure::SYMMETRIC;
        }
        let n = self.nrows();
        let zero = T::zero();
        if (0..n).all(|i| (i + 1..n).all(|j| self.data[(i, j)] == zero)) {
            flags |= Structure::LOWER_TRIANGULAR;
        }
        if (0..n).all(|i| (0..i).all(|j| self.data[(i, j)] == zero)) {
            flags |= Structure::UPPER_TRIANGULAR;
        }
        flags
    }

    /// Approximate equality with a caller-chosen tolerance.
    pub fn approx_eq_with(&self, other: &Matrix<T>, opts: &CompareOptions) -> bool {
        let eps = num_traits::cast(opts.epsilon).unwrap_or_else(T::epsilon);
        self.within(other, eps)
    }

    /// One rendered row per line.
    pub fn display_with(&self, opts: &FormatOptions) -> String {
        self.rows().map(|row| row.display_with(opts) + "\n").collect()
    }

    fn within(&self, other: &Matrix<T>, eps: T) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.nrows() != other.nrows() || self.ncols() != other.ncols() {
            return false;
        }
        (0..self.nrows()).all(|i| {
            (0..self.ncols()).all(|j| (self.data[(i, j)] - other.data[(i, j)]).abs() < eps)
        })
    }

    fn zip_with(
        &self,
        other: &Matrix<T>,
        msg: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<Matrix<T>, LinalgError> {
        if self.nrows() != other.nrows() || self.ncols() != other.ncols() {
            return Err(LinalgError::SizeMismatch(msg));
        }
        Ok(Self::from_fn(self.nrows(), self.ncols(), |i, j| {
            f(self.data[(i, j)], other.data[(i, j)])
        }))
    }
}

impl<T: Float> Default for Matrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> MatrixGet<T> for Matrix<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self.data[(i, j)]
    }
}

impl<T: Float> MatShape for Matrix<T> {
    fn nrows(&self) -> usize {
        self.data.nrows()
    }
    fn ncols(&self) -> usize {
        self.data.ncols()
    }
}

impl<T: Float> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.within(other, default_tolerance())
    }
}

impl<T: Float> AbsDiffEq for Matrix<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        default_tolerance()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.within(other, epsilon)
    }
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &T {
        &self.data[index]
    }
}

impl<T: Float> From<Mat<T>> for Matrix<T> {
    fn from(mat: Mat<T>) -> Self {
        Self::from_fn(mat.nrows(), mat.ncols(), |i, j| mat[(i, j)])
    }
}

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&FormatOptions::default()))
    }
}

impl<T: Float + fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<T>> = self.rows().map(Vector::into_vec).collect();
        f.debug_struct("Matrix")
            .field("nrows", &self.nrows())
            .field("ncols", &self.ncols())
            .field("rows", &rows)
            .finish()
    }
}
