//! Lower-triangular matrix assembly and decomposition
//!
//! A lower-triangular `[..., dim, dim]` matrix is parameterized by a diagonal
//! vector `[..., dim]` and an optional off-diagonal vector
//! `[..., dim * (dim - 1) / 2]`. Off-diagonal entries are enumerated row by
//! row with ascending columns, strictly below the diagonal, i.e. the order of
//! [`tril_indices(dim, -1)`](mprl_core::dense::tril_indices).

use crate::error::{MatrixError, MatrixResult};
use mprl_core::dense::tril_indices;
use mprl_core::DenseND;
use scirs2_core::ndarray_ext::{ArrayD, IxDyn};
use scirs2_core::numeric::Float;

/// Number of strictly-lower entries of a `dim x dim` matrix.
pub fn num_off_diag(dim: usize) -> usize {
    dim * dim.saturating_sub(1) / 2
}

/// Compose the lower triangular matrix `L` from diagonal and off-diagonal entries.
///
/// Leading axes of `diag` are batch axes and must match those of `off_diag`.
/// Without `off_diag` the strictly-lower entries stay zero.
///
/// # Examples
///
/// ```
/// use mprl_core::DenseND;
/// use mprl_util::build_lower_matrix;
///
/// let diag = DenseND::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
/// let off = DenseND::from_vec(vec![4.0, 5.0, 6.0], &[3]).unwrap();
/// let l = build_lower_matrix(&diag, Some(&off)).unwrap();
/// assert_eq!(
///     l.to_vec(),
///     vec![1.0, 0.0, 0.0,
///          4.0, 2.0, 0.0,
///          5.0, 6.0, 3.0]
/// );
/// ```
pub fn build_lower_matrix<T: Float>(
    diag: &DenseND<T>,
    off_diag: Option<&DenseND<T>>,
) -> MatrixResult<DenseND<T>> {
    if diag.rank() == 0 {
        return Err(MatrixError::invalid_argument(
            "build_lower_matrix",
            "diagonal vector must have at least one axis",
        ));
    }
    let l = diag.diag_embed()?;
    let Some(off_diag) = off_diag else {
        return Ok(l);
    };

    let dim = diag.shape()[diag.rank() - 1];
    let batch_shape = &diag.shape()[..diag.rank() - 1];
    let mut expected = batch_shape.to_vec();
    expected.push(num_off_diag(dim));
    if off_diag.shape() != expected.as_slice() {
        return Err(MatrixError::shape_mismatch(
            "build_lower_matrix",
            expected,
            off_diag.shape(),
        ));
    }

    let positions = tril_indices(dim, -1);
    let batch_rank = batch_shape.len();
    let mut l = l.into_array();
    let mut target = vec![0; batch_rank + 2];
    for (src, &value) in off_diag.as_array().indexed_iter() {
        let (row, col) = positions[src[batch_rank]];
        for axis in 0..batch_rank {
            target[axis] = src[axis];
        }
        target[batch_rank] = row;
        target[batch_rank + 1] = col;
        l[IxDyn(&target)] = value;
    }
    Ok(DenseND::from_array(l))
}

/// Decompose a lower triangular matrix `L` into its diagonal and off-diagonal entries.
///
/// Returns `(diag, None)` when `has_off_diag` is false, otherwise the
/// strictly-lower entries in the same order [`build_lower_matrix`] consumes.
///
/// # Examples
///
/// ```
/// use mprl_core::DenseND;
/// use mprl_util::{build_lower_matrix, reverse_build_matrix};
///
/// let diag = DenseND::from_vec(vec![1.0, 2.0], &[2]).unwrap();
/// let off = DenseND::from_vec(vec![0.5], &[1]).unwrap();
/// let l = build_lower_matrix(&diag, Some(&off)).unwrap();
///
/// let (d, o) = reverse_build_matrix(&l, true).unwrap();
/// assert_eq!(d, diag);
/// assert_eq!(o, Some(off));
/// ```
pub fn reverse_build_matrix<T: Float>(
    l: &DenseND<T>,
    has_off_diag: bool,
) -> MatrixResult<(DenseND<T>, Option<DenseND<T>>)> {
    let rank = l.rank();
    if rank < 2 || l.shape()[rank - 1] != l.shape()[rank - 2] {
        return Err(MatrixError::invalid_argument(
            "reverse_build_matrix",
            format!("expected a batch of square matrices, got shape {:?}", l.shape()),
        ));
    }
    let diag = l.diagonal()?;
    if !has_off_diag {
        return Ok((diag, None));
    }

    let dim = l.shape()[rank - 1];
    let positions = tril_indices(dim, -1);
    let mut shape = l.shape()[..rank - 2].to_vec();
    shape.push(positions.len());

    let source = l.as_array();
    let mut off_diag = ArrayD::<T>::zeros(IxDyn(&shape));
    let mut at = vec![0; rank];
    for (dst, value) in off_diag.indexed_iter_mut() {
        let (row, col) = positions[dst[rank - 2]];
        for axis in 0..rank - 2 {
            at[axis] = dst[axis];
        }
        at[rank - 2] = row;
        at[rank - 1] = col;
        *value = source[IxDyn(&at)];
    }
    Ok((diag, Some(DenseND::from_array(off_diag))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(shape: &[usize], offset: f64) -> DenseND<f64> {
        let n: usize = shape.iter().product();
        DenseND::from_vec((0..n).map(|x| x as f64 + offset).collect(), shape).unwrap()
    }

    #[test]
    fn test_build_without_off_diag_is_diagonal() {
        let diag = seq(&[3], 1.0);
        let l = build_lower_matrix(&diag, None).unwrap();
        assert_eq!(l.to_vec(), vec![1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0]);
    }

    #[test]
    fn test_build_batched() {
        let diag = seq(&[2, 2], 1.0);
        let off = seq(&[2, 1], 10.0);
        let l = build_lower_matrix(&diag, Some(&off)).unwrap();
        assert_eq!(l.shape(), &[2, 2, 2]);
        assert_eq!(l.to_vec(), vec![1.0, 0.0, 10.0, 2.0, 3.0, 0.0, 11.0, 4.0]);
    }

    #[test]
    fn test_build_rejects_wrong_off_diag_length() {
        let diag = seq(&[3], 1.0);
        let off = seq(&[2], 0.0);
        let err = build_lower_matrix(&diag, Some(&off)).unwrap_err();
        assert!(matches!(err, MatrixError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_build_rejects_batch_mismatch() {
        let diag = seq(&[2, 3], 1.0);
        let off = seq(&[3, 3], 0.0);
        assert!(build_lower_matrix(&diag, Some(&off)).is_err());
    }

    #[test]
    fn test_build_dim_one() {
        let diag = seq(&[1], 7.0);
        let off = DenseND::<f64>::zeros(&[0]);
        let l = build_lower_matrix(&diag, Some(&off)).unwrap();
        assert_eq!(l.to_vec(), vec![7.0]);
        let (d, o) = reverse_build_matrix(&l, true).unwrap();
        assert_eq!(d, diag);
        assert_eq!(o.unwrap().shape(), &[0]);
    }

    #[test]
    fn test_reverse_without_off_diag() {
        let l = build_lower_matrix(&seq(&[4], 1.0), Some(&seq(&[6], 5.0))).unwrap();
        let (d, o) = reverse_build_matrix(&l, false).unwrap();
        assert_eq!(d.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        assert!(o.is_none());
    }

    #[test]
    fn test_reverse_rejects_non_square() {
        assert!(reverse_build_matrix(&DenseND::<f64>::zeros(&[2, 3]), true).is_err());
        assert!(reverse_build_matrix(&DenseND::<f64>::zeros(&[3]), false).is_err());
    }
}
