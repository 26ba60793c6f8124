//! Cholesky factor construction
//!
//! - [`transform_to_cholesky`] maps an unconstrained square matrix onto a
//!   valid lower Cholesky factor.
//! - [`to_cholesky`] picks one of three ways to obtain `L`: take it as given,
//!   assemble it from parameter vectors, or factorize a covariance matrix.

use crate::error::{MatrixError, MatrixResult};
use crate::lower::build_lower_matrix;
use mprl_core::DenseND;
use scirs2_core::ndarray_ext::ScalarOperand;
use scirs2_core::num_traits::NumAssign;
use scirs2_core::numeric::{Float, FromPrimitive, NumCast};
use std::iter::Sum;

/// Transform an unconstrained square matrix into a lower Cholesky factor.
///
/// The strictly-lower entries pass through unchanged, the diagonal is
/// exponentiated (so it is strictly positive) and the strictly-upper half of
/// the input is discarded. Works on any batch `[..., n, n]`.
///
/// # Examples
///
/// ```
/// use mprl_core::DenseND;
/// use mprl_util::transform_to_cholesky;
///
/// let m = DenseND::from_vec(vec![0.0, 7.0, -2.0, 0.0], &[2, 2]).unwrap();
/// let l = transform_to_cholesky(&m).unwrap();
/// assert_eq!(l.to_vec(), vec![1.0, 0.0, -2.0, 1.0]);
/// ```
pub fn transform_to_cholesky<T: Float>(mat: &DenseND<T>) -> MatrixResult<DenseND<T>> {
    let rank = mat.rank();
    if rank < 2 || mat.shape()[rank - 1] != mat.shape()[rank - 2] {
        return Err(MatrixError::invalid_argument(
            "transform_to_cholesky",
            format!("expected a batch of square matrices, got shape {:?}", mat.shape()),
        ));
    }
    let strictly_lower = mat.tril(-1)?;
    let positive_diag = mat.diagonal()?.exp().diag_embed()?;
    Ok(&strictly_lower + &positive_diag)
}

/// The construction path [`to_cholesky`] takes for a set of arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CholeskySource<'a, T> {
    /// An explicit factor, returned unchanged
    Given(&'a DenseND<T>),
    /// Assembled from diagonal and off-diagonal parameter vectors
    Parameters {
        diag: &'a DenseND<T>,
        off_diag: &'a DenseND<T>,
    },
    /// Dense factorization of a covariance matrix
    Covariance(&'a DenseND<T>),
}

/// Decide how `L` is obtained from the optional arguments.
///
/// An explicit `l` wins over every other argument, even when they are
/// present too.
///
/// # Errors
///
/// - [`MatrixError::MissingParameters`] when there is neither `l` nor a
///   covariance matrix and one of the vectors is absent.
/// - [`MatrixError::ConflictingParameters`] when a covariance matrix comes
///   together with any parameter vector.
pub fn resolve_cholesky_source<'a, T>(
    diag_vector: Option<&'a DenseND<T>>,
    off_diag_vector: Option<&'a DenseND<T>>,
    l: Option<&'a DenseND<T>>,
    cov_matrix: Option<&'a DenseND<T>>,
) -> MatrixResult<CholeskySource<'a, T>> {
    match (l, cov_matrix, diag_vector, off_diag_vector) {
        (Some(l), _, _, _) => Ok(CholeskySource::Given(l)),
        (None, None, Some(diag), Some(off_diag)) => {
            Ok(CholeskySource::Parameters { diag, off_diag })
        }
        (None, None, _, _) => Err(MatrixError::MissingParameters),
        (None, Some(cov), None, None) => Ok(CholeskySource::Covariance(cov)),
        (None, Some(_), _, _) => Err(MatrixError::ConflictingParameters),
    }
}

/// Compute the Cholesky factor `L` from whichever arguments are available.
///
/// See [`resolve_cholesky_source`] for the precedence rules.
///
/// # Examples
///
/// ```
/// use mprl_core::DenseND;
/// use mprl_util::to_cholesky;
///
/// let cov = DenseND::from_vec(vec![4.0_f64, 2.0, 2.0, 2.0], &[2, 2]).unwrap();
/// let l = to_cholesky(None, None, None, Some(&cov)).unwrap();
///
/// let diag = DenseND::from_vec(vec![2.0_f64, 1.0], &[2]).unwrap();
/// let off = DenseND::from_vec(vec![1.0], &[1]).unwrap();
/// let built = to_cholesky(Some(&diag), Some(&off), None, None).unwrap();
/// assert_eq!(built.to_vec(), vec![2.0, 0.0, 1.0, 1.0]);
/// for (a, b) in l.to_vec().iter().zip(built.to_vec()) {
///     assert!((a - b).abs() < 1e-12);
/// }
/// ```
pub fn to_cholesky<T>(
    diag_vector: Option<&DenseND<T>>,
    off_diag_vector: Option<&DenseND<T>>,
    l: Option<&DenseND<T>>,
    cov_matrix: Option<&DenseND<T>>,
) -> MatrixResult<DenseND<T>>
where
    T: Float + FromPrimitive + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + 'static,
{
    let source = resolve_cholesky_source(diag_vector, off_diag_vector, l, cov_matrix)?;
    match source {
        CholeskySource::Given(l) => {
            log::debug!("to_cholesky: using the given factor of shape {:?}", l.shape());
            Ok(l.clone())
        }
        CholeskySource::Parameters { diag, off_diag } => {
            log::debug!(
                "to_cholesky: assembling from parameter vectors of shape {:?}",
                diag.shape()
            );
            build_lower_matrix(diag, Some(off_diag))
        }
        CholeskySource::Covariance(cov) => {
            log::debug!(
                "to_cholesky: factorizing covariance of shape {:?}",
                cov.shape()
            );
            cov.cholesky()
                .map_err(|e| MatrixError::Factorization(e.to_string()))
        }
    }
}
