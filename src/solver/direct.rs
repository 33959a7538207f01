//! Direct dense solvers built on the adjugate inverse and the Cholesky factor.
//!
//! This module provides two solvers for `A·x = b`:
//! - `InverseSolver` forms `A⁻¹` once and multiplies. Works for any non-singular
//!   square matrix, at factorial cost.
//! - `CholeskySolver` factors `A = L·Lᵀ` and runs one forward and one backward
//!   substitution. Requires `A` symmetric positive-definite.
//!
//! Both cache their factor, so repeated right-hand sides can go through
//! `solve_cached` without refactoring.

use num_traits::Float;

use crate::core::traits::{Indexing, MatShape, MatrixGet};
use crate::error::LinalgError;
use crate::matrix::{Matrix, Vector};
use crate::solver::LinearSolver;
use crate::solver::{cholesky, inverse};

const RHS_MISMATCH: &str = "Solve with right-hand side of different size than the matrix.";
const NOT_FACTORED: &str = "Cached solve before any factorization.";

/// Solver that multiplies by the explicit inverse.
pub struct InverseSolver<T> {
    /// Cached inverse (if computed)
    inverse: Option<Matrix<T>>,
}

impl<T: Float> InverseSolver<T> {
    pub fn new() -> Self {
        InverseSolver { inverse: None }
    }

    /// Solve using the cached inverse.
    ///
    /// # Errors
    /// `Computation` if called before any `solve`; `SizeMismatch` if `b` has the wrong length.
    pub fn solve_cached(&self, b: &Vector<T>, x: &mut Vector<T>) -> Result<(), LinalgError> {
        let inv = self.inverse.as_ref().ok_or(LinalgError::Computation(NOT_FACTORED))?;
        if b.nrows() != inv.ncols() {
            return Err(LinalgError::SizeMismatch(RHS_MISMATCH));
        }
        let solution = inv
            .rows()
            .map(|row| row.dot(b))
            .collect::<Result<Vec<T>, _>>()?;
        *x = Vector::from(solution);
        Ok(())
    }

    pub fn inverse(&self) -> Option<&Matrix<T>> {
        self.inverse.as_ref()
    }
}

impl<T: Float> Default for InverseSolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M> LinearSolver<M, Vector<T>> for InverseSolver<T>
where
    T: Float,
    M: MatrixGet<T> + MatShape,
{
    type Error = LinalgError;

    fn solve(&mut self, a: &M, b: &Vector<T>, x: &mut Vector<T>) -> Result<(), LinalgError> {
        if b.nrows() != a.nrows() {
            return Err(LinalgError::SizeMismatch(RHS_MISMATCH));
        }
        // overwrites any previous inverse
        self.inverse = Some(inverse::inverse(a)?);
        self.solve_cached(b, x)
    }
}

/// Solver based on the Cholesky factor `L`.
pub struct CholeskySolver<T> {
    /// Cached lower-triangular factor (if computed)
    factor: Option<Matrix<T>>,
}

impl<T: Float> CholeskySolver<T> {
    pub fn new() -> Self {
        CholeskySolver { factor: None }
    }

    /// Solve `L·Lᵀ·x = b` using the cached factor.
    ///
    /// # Errors
    /// `Computation` if called before any `solve`; `SizeMismatch` if `b` has the wrong length.
    pub fn solve_cached(&self, b: &Vector<T>, x: &mut Vector<T>) -> Result<(), LinalgError> {
        let l = self.factor.as_ref().ok_or(LinalgError::Computation(NOT_FACTORED))?;
        let n = l.nrows();
        if b.nrows() != n {
            return Err(LinalgError::SizeMismatch(RHS_MISMATCH));
        }
        // forward: L·y = b
        let mut y = vec![T::zero(); n];
        for i in 0..n {
            let sum = (0..i).fold(T::zero(), |acc, k| acc + l[(i, k)] * y[k]);
            y[i] = (b[i] - sum) / l[(i, i)];
        }
        // backward: Lᵀ·x = y
        let mut sol = vec![T::zero(); n];
        for i in (0..n).rev() {
            let sum = (i + 1..n).fold(T::zero(), |acc, k| acc + l[(k, i)] * sol[k]);
            sol[i] = (y[i] - sum) / l[(i, i)];
        }
        *x = Vector::from(sol);
        Ok(())
    }

    pub fn factor(&self) -> Option<&Matrix<T>> {
        self.factor.as_ref()
    }
}

impl<T: Float> Default for CholeskySolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M> LinearSolver<M, Vector<T>> for CholeskySolver<T>
where
    T: Float,
    M: MatrixGet<T> + MatShape,
{
    type Error = LinalgError;

    fn solve(&mut self, a: &M, b: &Vector<T>, x: &mut Vector<T>) -> Result<(), LinalgError> {
        if b.nrows() != a.nrows() {
            return Err(LinalgError::SizeMismatch(RHS_MISMATCH));
        }
        self.factor = Some(cholesky::cholesky(a)?);
        self.solve_cached(b, x)
    }
}
