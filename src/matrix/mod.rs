//! Matrix module: the dense `Vector` and `Matrix` types.

pub mod dense;
pub use dense::{Matrix, Structure};
pub mod vector;
pub use vector::Vector;
