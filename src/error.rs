//! Error types for textcore.

use std::fmt;

/// Result type alias for textcore operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for textcore operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Range constructed with `start > end`.
    InvalidRange { start: usize, end: usize },
    /// Indexed access outside a view or fragment.
    OutOfBounds { index: usize, len: usize },
    /// Sub-fragment bounds not contained in the parent.
    FragmentBounds { from: usize, to: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: start {start} > end {end}")
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::FragmentBounds { from, to, len } => {
                write!(f, "fragment ({from}, {to}) outside enclosing length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRange { start: 5, end: 2 };
        assert!(err.to_string().contains("start 5 > end 2"));

        let err = Error::OutOfBounds { index: 10, len: 3 };
        assert!(err.to_string().contains("index 10"));

        let err = Error::FragmentBounds {
            from: 2,
            to: 9,
            len: 4,
        };
        assert!(err.to_string().contains("(2, 9)"));
    }
}
