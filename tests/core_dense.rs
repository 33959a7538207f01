//! Property tests for the dense vector and matrix operations.
//!
//! These tests check the algebraic identities the library guarantees on random inputs:
//! add/subtract cancel, transpose is an involution, `A·A⁻¹ = I` and `L·Lᵀ = A`.
//! Random data comes from `rand`; comparisons use the crate's approximate equality.

use approx::assert_abs_diff_eq;
use cofactor::{LinalgError, Matrix, Structure, Vector};
use rand::Rng;

/// Random `n x m` matrix with entries in `[-10, 10)`.
fn random_matrix(rng: &mut impl Rng, n: usize, m: usize) -> Matrix<f64> {
    Matrix::from_fn(n, m, |_, _| rng.gen_range(-10.0..10.0))
}

/// Random symmetric positive-definite matrix: `Bᵀ·B + n·I`.
fn random_spd(rng: &mut impl Rng, n: usize) -> Matrix<f64> {
    let b = random_matrix(rng, n, n);
    let shift = Matrix::identity(n).scale(n as f64);
    b.transpose().multiply_matrix(&b).unwrap().add_matrix(&shift).unwrap()
}

#[test]
fn add_then_subtract_is_identity() {
    let mut rng = rand::thread_rng();
    for len in 0..8 {
        let a: Vector<f64> = (0..len).map(|_| rng.gen_range(-1e3..1e3)).collect();
        let b: Vector<f64> = (0..len).map(|_| rng.gen_range(-1e3..1e3)).collect();
        assert_eq!(a.add(&b).unwrap().subtract(&b).unwrap(), a);
    }
}

#[test]
fn transpose_twice_is_identity() {
    let mut rng = rand::thread_rng();
    for (n, m) in [(1, 1), (2, 5), (4, 3), (6, 6)] {
        let a = random_matrix(&mut rng, n, m);
        let t = a.transpose();
        assert_eq!((t.nrows(), t.ncols()), (m, n));
        assert_eq!(t.transpose(), a);
    }
}

#[test]
fn matrix_times_inverse_is_identity() {
    let mut rng = rand::thread_rng();
    for n in 1..=5 {
        // diagonally dominant, so never singular
        let a = random_matrix(&mut rng, n, n)
            .add_matrix(&Matrix::identity(n).scale(100.0))
            .unwrap();
        let inv = a.inverse().unwrap();
        assert_abs_diff_eq!(a.multiply_matrix(&inv).unwrap(), Matrix::identity(n), epsilon = 1e-9);
        assert_abs_diff_eq!(inv.multiply_matrix(&a).unwrap(), Matrix::identity(n), epsilon = 1e-9);
    }
}

#[test]
fn cholesky_reconstructs_spd_input() {
    let mut rng = rand::thread_rng();
    for n in 1..=6 {
        let a = random_spd(&mut rng, n);
        let l = a.cholesky().unwrap();
        assert!(l.structure().contains(Structure::LOWER_TRIANGULAR));
        for i in 0..n {
            for j in i + 1..n {
                assert_eq!(l[(i, j)], 0.0);
            }
        }
        assert_eq!(l.multiply_matrix(&l.transpose()).unwrap(), a);
    }
}

#[test]
fn determinant_of_product_is_product_of_determinants() {
    let mut rng = rand::thread_rng();
    let a = random_matrix(&mut rng, 4, 4);
    let b = random_matrix(&mut rng, 4, 4);
    let lhs = a.multiply_matrix(&b).unwrap().determinant().unwrap();
    let rhs = a.determinant().unwrap() * b.determinant().unwrap();
    approx::assert_relative_eq!(lhs, rhs, max_relative = 1e-6, epsilon = 1e-3);
}

#[test]
fn documented_examples() {
    let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    assert_eq!(m.determinant().unwrap(), -2.0);

    let two_by_three = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    let err = two_by_three.determinant().unwrap_err();
    assert!(matches!(err, LinalgError::SizeMismatch(_)));
    assert!(err.to_string().contains("non-square or empty matrix"));

    let singular = Matrix::from_rows(&[[0.0, 416.7], [0.0, -5.1]]).unwrap();
    let err = singular.inverse().unwrap_err();
    assert!(matches!(err, LinalgError::Computation(_)));
    assert!(err.to_string().contains("zero determinant"));

    let spd = Matrix::from_rows(&[[1.0, -1.0, 1.0], [-1.0, 2.0, -1.0], [1.0, -1.0, 5.0]]).unwrap();
    let l = spd.cholesky().unwrap();
    assert_eq!(
        l,
        Matrix::from_rows(&[[1.0, 0.0, 0.0], [-1.0, 1.0, 0.0], [1.0, 0.0, 2.0]]).unwrap()
    );

    let asym = Matrix::from_rows(&[[1.0, -1.0, 1.0], [-1.0, 2.0, -1.0], [2.0, -1.0, 5.0]]).unwrap();
    assert!(asym.cholesky().unwrap_err().to_string().contains("non-symmetrical"));

    let a = Vector::from_slice(&[76735.5, -0.1, 44.9, -504.9, -5803.1]);
    let b = Vector::from_slice(&[0.0, -7.1, 50145.8, 123.4, 0.0]);
    assert_abs_diff_eq!(a.dot(&b).unwrap(), 2189242.47, epsilon = 1e-5);
}
