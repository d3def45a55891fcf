use std::fmt;

/// Errors returned by the checked accessors in [`crate::math`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A matrix row index was outside `0..4`.
    RowOutOfRange { row: usize },
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfRange { row } => {
                write!(f, "row index {row} out of range for a 4x4 matrix")
            }
        }
    }
}

impl std::error::Error for MathError {}

/// Convenience alias used by the checked accessors.
pub type Result<T> = std::result::Result<T, MathError>;
