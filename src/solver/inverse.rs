//! Matrix inverse by the classical adjugate method.
//!
//! `A⁻¹ = adj(A) / det(A)`, where the adjugate is the transposed cofactor matrix.
//! The construction proceeds in the textbook order:
//!
//! 1. For every linear index `p` in `0..N²` take the minor that drops row `p / N`
//!    and column `p % N`, and compute its determinant.
//! 2. Lay the `N²` determinants out row-major into an `N x N` matrix.
//! 3. Transpose it.
//! 4. Negate the entries whose row and column indices sum to an odd number.
//! 5. Scale by `1 / det(A)`.
//!
//! Each minor is an independent index view over the input, so computing one never
//! disturbs another. A `1 x 1` matrix has a single empty minor with determinant one.
//!
//! # References
//! - Strang, G. Introduction to Linear Algebra, §5.3 (cofactors and the inverse)

use num_traits::Float;

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::solver::determinant::{determinant, minor_determinant};

/// Inverse of a non-singular square matrix.
///
/// # Errors
/// - `SizeMismatch` from the determinant if `a` is empty or not square.
/// - `Computation` if the determinant is exactly zero.
pub fn inverse<T, M>(a: &M) -> Result<Matrix<T>, LinalgError>
where
    T: Float,
    M: MatrixGet<T> + MatShape + ?Sized,
{
    let det = determinant(a)?;
    if det == T::zero() {
        log::debug!("inverse: determinant is zero, matrix is singular");
        return Err(LinalgError::Computation("Inverse of zero determinant matrix."));
    }
    let n = a.nrows();
    log::trace!("inverse: {} minors of size {}x{}", n * n, n - 1, n - 1);

    let mut minors = Vec::with_capacity(n * n);
    let mut rows = Vec::with_capacity(n - 1);
    let mut cols = Vec::with_capacity(n - 1);
    for p in 0..n * n {
        let (skip_row, skip_col) = (p / n, p % n);
        rows.clear();
        rows.extend((0..n).filter(|&i| i != skip_row));
        cols.clear();
        cols.extend((0..n).filter(|&j| j != skip_col));
        minors.push(minor_determinant(a, &rows, &cols));
    }

    let mut adjugate = Matrix::from_fn(n, n, |i, j| minors[i * n + j]).transpose();
    for i in 0..n {
        for j in 0..n {
            if (i + j) % 2 == 1 {
                adjugate.set(i, j, -adjugate[(i, j)]);
            }
        }
    }
    Ok(adjugate.scale(T::one() / det))
}
