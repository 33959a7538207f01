//! Determinant by cofactor (Laplace) expansion along the first row.
//!
//! For an `N x N` matrix the determinant is
//!
//! ```text
//! det(A) = Σᵢ (-1)ⁱ · A(0, i) · det(Mᵢ)
//! ```
//!
//! where `Mᵢ` drops row 0 and column `i`. The 1x1 and 2x2 cases are closed form.
//! Minors are never materialised: each level of the recursion works on a list of
//! row indices and a list of column indices into the original storage.
//!
//! The cost is factorial in `N`; this is intended for small matrices only.

use num_traits::Float;

use crate::core::traits::{MatShape, MatrixGet};
use crate::error::LinalgError;

/// Determinant of a non-empty square matrix.
///
/// # Errors
/// `SizeMismatch` if `a` is empty or not square.
pub fn determinant<T, M>(a: &M) -> Result<T, LinalgError>
where
    T: Float,
    M: MatrixGet<T> + MatShape + ?Sized,
{
    let n = a.nrows();
    if n == 0 || n != a.ncols() {
        return Err(LinalgError::SizeMismatch("Determinant of non-square or empty matrix."));
    }
    log::trace!("determinant: cofactor expansion of a {n}x{n} matrix");
    let all: Vec<usize> = (0..n).collect();
    Ok(minor_determinant(a, &all, &all))
}

/// Determinant of the square view `rows x cols` of `a`, expanded along `rows[0]`.
///
/// The empty view has determinant one.
pub(crate) fn minor_determinant<T, M>(a: &M, rows: &[usize], cols: &[usize]) -> T
where
    T: Float,
    M: MatrixGet<T> + ?Sized,
{
    debug_assert_eq!(rows.len(), cols.len());
    match rows.len() {
        0 => T::one(),
        1 => a.get(rows[0], cols[0]),
        2 => {
            a.get(rows[0], cols[0]) * a.get(rows[1], cols[1])
                - a.get(rows[0], cols[1]) * a.get(rows[1], cols[0])
        }
        n => {
            let top = rows[0];
            let below = &rows[1..];
            let mut sub_cols = Vec::with_capacity(n - 1);
            let mut result = T::zero();
            for (i, &col) in cols.iter().enumerate() {
                sub_cols.clear();
                sub_cols.extend_from_slice(&cols[..i]);
                sub_cols.extend_from_slice(&cols[i + 1..]);
                let term = a.get(top, col) * minor_determinant(a, below, &sub_cols);
                // even columns add, odd columns subtract
                if i % 2 == 0 {
                    result = result + term;
                } else {
                    result = result - term;
                }
            }
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;
    use approx::assert_relative_eq;
    use faer::Mat;

    #[test]
    fn one_by_one_is_the_element() {
        let m = Matrix::from_rows(&[[-3.5]]).unwrap();
        assert_eq!(determinant(&m).unwrap(), -3.5);
    }

    #[test]
    fn two_by_two_closed_form() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(determinant(&m).unwrap(), -2.0);
    }

    #[test]
    fn three_by_three_signs_alternate() {
        // 2·(0·1 - 3·1) - 1·(1·1 - 3·0) + 5·(1·1 - 0·0) = -6 - 1 + 5
        let m = Matrix::from_rows(&[[2.0, 1.0, 5.0], [1.0, 0.0, 3.0], [0.0, 1.0, 1.0]]).unwrap();
        assert_eq!(determinant(&m).unwrap(), -2.0);
    }

    #[test]
    fn four_by_four_large_entries() {
        let m = Matrix::from_rows(&[
            [1.0, 66.2, -0.7, 84566.1],
            [-851.4, 3.3, 75.1, -0.9],
            [567.8, -324748.0, 0.0, 1.6],
            [0.0, 0.5, 7856.2, -61.0],
        ])
        .unwrap();
        assert_relative_eq!(
            determinant(&m).unwrap(),
            -183690204241426566.2,
            max_relative = 1e-12
        );
    }

    #[test]
    fn non_square_or_empty_is_rejected() {
        let err = determinant(&Matrix::<f64>::new()).unwrap_err();
        assert_eq!(err.to_string(), "Determinant of non-square or empty matrix.");
        let wide = Matrix::from_rows(&[[-0.1, 4463.1]]).unwrap();
        assert_eq!(
            determinant(&wide),
            Err(LinalgError::SizeMismatch("Determinant of non-square or empty matrix."))
        );
        let two_by_three = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert!(determinant(&two_by_three).is_err());
    }

    #[test]
    fn faer_storage_is_accepted() {
        let a = Mat::from_fn(3, 3, |i, j| if i == j { 2.0 } else { 0.0 });
        assert_eq!(determinant::<f64, _>(&a).unwrap(), 8.0);
    }

    #[test]
    fn minor_view_skips_rows_and_columns() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]).unwrap();
        // drop row 1 and column 0: [[2, 3], [8, 10]]
        assert_eq!(minor_determinant(&m, &[0, 2], &[1, 2]), -4.0);
        assert_eq!(minor_determinant::<f64, _>(&m, &[], &[]), 1.0);
    }
}
