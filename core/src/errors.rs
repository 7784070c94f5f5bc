use std::error::Error;
use std::fmt;

/// Result type for fallible NDMatrix operations.
pub type NdMatrixResult<T> = Result<T, NdMatrixError>;

/// Error produced when a runtime value does not fit the statically-known
/// shape of a matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdMatrixError {
    /// A list of coordinate components had the wrong length.
    DimensionMismatch {
        /// Number of dimensions of the target coordinate type.
        expected: usize,
        /// Number of components supplied.
        got: usize,
    },
}
impl fmt::Display for NdMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => write!(
                f,
                "Expected {} coordinate components but got {}",
                expected, got,
            ),
        }
    }
}
impl Error for NdMatrixError {}
