//! Core linear-algebra traits for cofactor.

/// Uniform length query for vectors (dense rows or plain `Vec`s).
pub trait Indexing {
    /// Number of rows (or length for a vector).
    fn nrows(&self) -> usize;
}

/// Shape of a two-dimensional operand.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}

/// Element access by `(row, column)`.
///
/// The determinant, inverse and Cholesky routines only read their input through
/// this trait, so they accept any dense storage that implements it.
pub trait MatrixGet<T> {
    fn get(&self, i: usize, j: usize) -> T;
}
