//! Tunable comparison and formatting options.

pub mod options;
pub use options::{CompareOptions, DEFAULT_EPSILON, DEFAULT_PRECISION, FormatOptions};
