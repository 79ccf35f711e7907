#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitArrayError {
    #[cfg_attr(feature = "std", error("Index {0} is out of bounds for length {1}"))]
    IndexOutOfBounds(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("Cannot remove {0} bits from a sequence of length {1}")
    )]
    RemoveTooMany(usize, usize),

    #[cfg_attr(
        feature = "std",
        error("Length mismatch: left has {left} bits, right has {right}")
    )]
    LengthMismatch { left: usize, right: usize },

    #[cfg_attr(
        feature = "std",
        error("Index {0} is not strictly greater than the previous index")
    )]
    UnsortedIndices(usize),

    #[cfg_attr(
        feature = "std",
        error("Word count mismatch: expected {expected}, found {found}")
    )]
    WordCountMismatch { expected: usize, found: usize },
}

impl BitArrayError {
    /// True for the errors raised when a position or removal count exceeds the length.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            BitArrayError::IndexOutOfBounds(..) | BitArrayError::RemoveTooMany(..)
        )
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitArrayError::IndexOutOfBounds(i, l) => {
                write!(f, "Index {} is out of bounds for length {}", i, l)
            }
            BitArrayError::RemoveTooMany(k, l) => {
                write!(f, "Cannot remove {} bits from a sequence of length {}", k, l)
            }
            BitArrayError::LengthMismatch { left, right } => {
                write!(
                    f,
                    "Length mismatch: left has {} bits, right has {}",
                    left, right
                )
            }
            BitArrayError::UnsortedIndices(i) => {
                write!(
                    f,
                    "Index {} is not strictly greater than the previous index",
                    i
                )
            }
            BitArrayError::WordCountMismatch { expected, found } => {
                write!(
                    f,
                    "Word count mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for BitArrayError {}

pub type Result<T> = core::result::Result<T, BitArrayError>;
