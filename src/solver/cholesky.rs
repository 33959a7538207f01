//! Cholesky decomposition `A = L·Lᵀ` of a symmetric positive-definite matrix.
//!
//! Rows of `L` are filled top to bottom, each from its first column to the
//! diagonal:
//!
//! ```text
//! L(j, j) = sqrt(A(j, j) - Σₖ<ⱼ L(j, k)²)
//! L(i, j) = (A(i, j) - Σₖ<ⱼ L(i, k)·L(j, k)) / L(j, j)      i > j
//! ```
//!
//! Symmetry is checked before any arithmetic. Once a row is complete its diagonal
//! entry must be strictly positive (a NaN from the square root of a negative
//! number fails this too); otherwise the matrix is not positive-definite and the
//! factorization stops there.

use num_traits::Float;

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::LinalgError;
use crate::matrix::vector::default_tolerance;
use crate::matrix::Matrix;

/// Lower-triangular Cholesky factor of `a`.
///
/// # Errors
/// - `SizeMismatch` if `a` is empty.
/// - `Computation` if `a` is not symmetric (non-square matrices included), or
///   if a diagonal entry of the factor is not strictly positive.
pub fn cholesky<T, M>(a: &M) -> Result<Matrix<T>, LinalgError>
where
    T: Float,
    M: MatrixGet<T> + MatShape + ?Sized,
{
    let n = a.nrows();
    if n == 0 {
        return Err(LinalgError::SizeMismatch("Cholesky decomposition of empty matrix."));
    }
    if !is_symmetric(a, default_tolerance()) {
        log::debug!("cholesky: {}x{} input is not symmetric", n, a.ncols());
        return Err(LinalgError::Computation(
            "Cholesky decomposition of non-symmetrical matrix.",
        ));
    }
    log::trace!("cholesky: factoring a {n}x{n} matrix");

    let mut l = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..=i {
            let sum = (0..j).fold(T::zero(), |acc, k| acc + l[(i, k)] * l[(j, k)]);
            if i == j {
                l.set(j, j, (a.get(j, j) - sum).sqrt());
            } else {
                l.set(i, j, (a.get(i, j) - sum) / l[(j, j)]);
            }
        }
        if !(l[(i, i)] > T::zero()) {
            log::debug!("cholesky: non-positive pivot at row {i}");
            return Err(LinalgError::Computation(
                "Cholesky decomposition of non-positive semi-definite matrix.",
            ));
        }
    }
    Ok(l)
}

/// Square, and `|a(i, j) - a(j, i)| < eps` for every pair.
pub(crate) fn is_symmetric<T, M>(a: &M, eps: T) -> bool
where
    T: Float,
    M: MatrixGet<T> + MatShape + ?Sized,
{
    let n = a.nrows();
    n == a.ncols() && (0..n).all(|i| (0..i).all(|j| (a.get(i, j) - a.get(j, i)).abs() < eps))
}
