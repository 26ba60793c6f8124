//! Error types for the matrix utilities
//!
//! Every utility returns [`MatrixResult`]. Failures of the underlying tensor
//! primitives are carried through the [`MatrixError::Tensor`] variant.

use thiserror::Error;

/// Error type for the matrix and tensor utilities
#[derive(Error, Debug)]
pub enum MatrixError {
    /// `to_cholesky` was asked to build `L` without both parameter vectors
    #[error("to_cholesky: both the diagonal and off-diagonal vectors are required when no covariance matrix is given")]
    MissingParameters,

    /// `to_cholesky` received a combination of arguments with no defined meaning
    #[error("to_cholesky: a covariance matrix cannot be combined with diagonal or off-diagonal vectors")]
    ConflictingParameters,

    /// Operand shapes do not agree
    #[error("{operation}: shape mismatch - expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        operation: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// An axis number outside the valid range of the array
    #[error("{operation}: axis {axis} is out of range for rank {rank}")]
    InvalidAxis {
        operation: &'static str,
        axis: isize,
        rank: usize,
    },

    /// Any other invalid argument
    #[error("{operation}: {message}")]
    InvalidArgument {
        operation: &'static str,
        message: String,
    },

    /// The covariance matrix could not be factorized
    #[error("Cholesky factorization failed: {0}")]
    Factorization(String),

    /// Error raised by a tensor primitive
    #[error("Tensor error: {0}")]
    Tensor(#[from] anyhow::Error),
}

/// Result type for the matrix utilities
pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(
        operation: &'static str,
        expected: impl Into<Vec<usize>>,
        actual: impl Into<Vec<usize>>,
    ) -> Self {
        MatrixError::ShapeMismatch {
            operation,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(operation: &'static str, message: impl Into<String>) -> Self {
        MatrixError::InvalidArgument {
            operation,
            message: message.into(),
        }
    }
}

/// Resolve a possibly negative axis against `rank`.
pub(crate) fn normalize_axis(
    operation: &'static str,
    axis: isize,
    rank: usize,
) -> MatrixResult<usize> {
    let resolved = if axis < 0 { axis + rank as isize } else { axis };
    if resolved < 0 || resolved >= rank as isize {
        return Err(MatrixError::InvalidAxis {
            operation,
            axis,
            rank,
        });
    }
    Ok(resolved as usize)
}
