//! Wrappers for faer dense matrix types.
//!
//! This module implements the core traits for `faer::Mat` and `faer::MatRef`,
//! so the determinant, inverse and Cholesky routines can run directly on faer storage
//! without first converting it into a [`Matrix`](crate::matrix::Matrix).
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)
//! - [num-traits crate documentation](https://docs.rs/num-traits)

use crate::core::traits::{MatShape, MatrixGet};
use faer::{Mat, MatRef};
use num_traits::Float;

impl<T: Float> MatrixGet<T> for Mat<T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<T: Float> MatShape for Mat<T> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

impl<'a, T: Float> MatrixGet<T> for MatRef<'a, T> {
    fn get(&self, i: usize, j: usize) -> T {
        self[(i, j)]
    }
}

impl<'a, T: Float> MatShape for MatRef<'a, T> {
    fn nrows(&self) -> usize {
        (*self).nrows()
    }
    fn ncols(&self) -> usize {
        (*self).ncols()
    }
}
