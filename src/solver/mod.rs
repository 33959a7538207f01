//! Determinant, inverse, Cholesky and the direct solvers built on them.

/// Common interface for the direct solvers.
pub trait LinearSolver<M, V> {
    type Error;
    /// Solve A·x = b, writing result into `x`.
    fn solve(&mut self, a: &M, b: &V, x: &mut V) -> Result<(), Self::Error>;
}

pub mod determinant;
pub use determinant::determinant;

pub mod inverse;
pub use inverse::inverse;

pub mod cholesky;
pub use cholesky::cholesky;

pub mod direct;
pub use direct::{CholeskySolver, InverseSolver};
