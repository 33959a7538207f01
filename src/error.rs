use thiserror::Error;

// Unified error type for cofactor

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinalgError {
    /// An operation's dimensional precondition failed. The message names the
    /// operation and the violated constraint and is stable across releases.
    #[error("{0}")]
    SizeMismatch(&'static str),
    /// A precondition on the values (not the shape) failed.
    #[error("{0}")]
    Computation(&'static str),
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("invalid range {start}..={end} for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

impl LinalgError {
    /// The stable message carried by `SizeMismatch` and `Computation`.
    pub fn message(&self) -> Option<&'static str> {
        match *self {
            LinalgError::SizeMismatch(msg) | LinalgError::Computation(msg) => Some(msg),
            _ => None,
        }
    }
}
