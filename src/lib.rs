//! cofactor: classical dense linear algebra with explicit failure signaling
//!
//! This crate provides vector and matrix arithmetic over real values together with the
//! textbook cofactor determinant, the adjugate inverse and the Cholesky decomposition.
//! Every operation checks its dimensional preconditions and returns a
//! [`LinalgError`] instead of panicking.
//!
//! Determinant and inverse are exponential in the matrix dimension; they are meant for
//! small matrices where exact, reproducible results matter more than speed.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod solver;
pub mod utils;

// Re-exports for convenience
pub use config::*;
pub use crate::core::traits::{Indexing, MatShape, MatrixGet};
pub use error::*;
pub use matrix::*;
pub use solver::*;
