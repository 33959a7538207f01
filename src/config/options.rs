//! Comparison and display options for vectors and matrices.
//!
//! This module provides the `CompareOptions` and `FormatOptions` structs, which
//! are used to tune approximate equality and text rendering via API calls. The
//! defaults reproduce the library's built-in behaviour: an absolute tolerance
//! of `1e-5` and four fractional digits.

/// Approximate-equality parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareOptions {
    /// Two components are equal when `|a - b| < epsilon`.
    pub epsilon: f64,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions { epsilon: DEFAULT_EPSILON }
    }
}

/// Text rendering parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatOptions {
    /// Number of fractional digits, rounded half-up.
    pub precision: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { precision: DEFAULT_PRECISION }
    }
}

/// Absolute tolerance used by `PartialEq` on vectors and matrices.
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Fractional digits used by `Display` on vectors and matrices.
pub const DEFAULT_PRECISION: usize = 4;
