//! Adding and expanding new axes
//!
//! [`add_expand_dim`] inserts size-1 axes at positions of the *result* array
//! and replicates each of them to a requested size. The array kinds it
//! accepts implement [`ExpandDims`].

use crate::error::{normalize_axis, MatrixError, MatrixResult};
use mprl_core::DenseND;
use scirs2_core::ndarray_ext::{ArrayD, Axis, IxDyn};
use scirs2_core::numeric::Num;

/// Axis insertion and replication for one concrete array kind.
pub trait ExpandDims: Sized {
    /// Number of axes of the array
    fn ndim(&self) -> usize;

    /// Insert a size-1 axis at `axis` (`0..=ndim`).
    fn insert_new_axis(self, axis: usize) -> MatrixResult<Self>;

    /// Replicate size-1 axes so the array takes `shape`.
    fn replicate_to(self, shape: &[usize]) -> MatrixResult<Self>;

    /// Current shape
    fn dims(&self) -> Vec<usize>;
}

impl<T: Clone + Num> ExpandDims for DenseND<T> {
    fn ndim(&self) -> usize {
        self.rank()
    }

    fn insert_new_axis(self, axis: usize) -> MatrixResult<Self> {
        Ok(self.unsqueeze(axis)?)
    }

    fn replicate_to(self, shape: &[usize]) -> MatrixResult<Self> {
        Ok(self.broadcast_to(shape)?)
    }

    fn dims(&self) -> Vec<usize> {
        self.shape_vec()
    }
}

impl<T: Clone> ExpandDims for ArrayD<T> {
    fn ndim(&self) -> usize {
        self.shape().len()
    }

    fn insert_new_axis(self, axis: usize) -> MatrixResult<Self> {
        if axis > self.shape().len() {
            return Err(MatrixError::InvalidAxis {
                operation: "add_expand_dim",
                axis: axis as isize,
                rank: self.shape().len() + 1,
            });
        }
        Ok(self.insert_axis(Axis(axis)))
    }

    fn replicate_to(self, shape: &[usize]) -> MatrixResult<Self> {
        let view = self
            .broadcast(IxDyn(shape))
            .ok_or_else(|| MatrixError::shape_mismatch("add_expand_dim", shape, self.shape()))?;
        Ok(view.to_owned())
    }

    fn dims(&self) -> Vec<usize> {
        self.shape().to_vec()
    }
}

/// Add new axes to `data` and expand them to the given sizes.
///
/// `add_dim_indices[k]` is the position of the k-th new axis in the result
/// (negative values count from the end of the result's rank) and
/// `add_dim_sizes[k]` the size it is replicated to. Existing axes keep their
/// sizes.
///
/// Sizes stay paired with their positions regardless of the order the
/// positions are listed in: `add_expand_dim([3], &[-1, 0], &[4, 2])` gives
/// shape `[2, 3, 4]`. Implementations that hand the sizes out in ascending
/// output-axis order instead give `[4, 3, 2]` for the same call.
///
/// # Errors
///
/// Fails when the two lists differ in length, when a position lies outside
/// the result's rank, or when two positions resolve to the same axis.
///
/// # Examples
///
/// ```
/// use mprl_core::DenseND;
/// use mprl_util::add_expand_dim;
///
/// let v = DenseND::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
/// let out = add_expand_dim(v, &[1], &[2]).unwrap();
/// assert_eq!(out.shape(), &[3, 2]);
/// assert_eq!(out.to_vec(), vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
///
/// let v = DenseND::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
/// let out = add_expand_dim(v, &[0, -1], &[2, 4]).unwrap();
/// assert_eq!(out.shape(), &[2, 3, 4]);
/// ```
pub fn add_expand_dim<A: ExpandDims>(
    data: A,
    add_dim_indices: &[isize],
    add_dim_sizes: &[usize],
) -> MatrixResult<A> {
    if add_dim_indices.len() != add_dim_sizes.len() {
        return Err(MatrixError::invalid_argument(
            "add_expand_dim",
            format!(
                "{} axis positions but {} sizes",
                add_dim_indices.len(),
                add_dim_sizes.len()
            ),
        ));
    }

    let out_rank = data.ndim() + add_dim_indices.len();
    let mut added: Vec<(usize, usize)> = add_dim_indices
        .iter()
        .zip(add_dim_sizes)
        .map(|(&idx, &size)| -> MatrixResult<(usize, usize)> {
            Ok((normalize_axis("add_expand_dim", idx, out_rank)?, size))
        })
        .collect::<MatrixResult<_>>()?;
    added.sort_unstable_by_key(|&(axis, _)| axis);
    if let Some(pair) = added.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(MatrixError::invalid_argument(
            "add_expand_dim",
            format!("axis {} is added more than once", pair[0].0),
        ));
    }

    // Ascending insertion keeps every earlier position valid.
    let mut expanded = data;
    for &(axis, _) in &added {
        expanded = expanded.insert_new_axis(axis)?;
    }
    let mut target = expanded.dims();
    for &(axis, size) in &added {
        target[axis] = size;
    }
    expanded.replicate_to(&target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::Array;

    #[test]
    fn test_dense_and_ndarray_agree() {
        let values: Vec<f64> = (0..6).map(|x| x as f64).collect();
        let dense = DenseND::from_vec(values.clone(), &[2, 3]).unwrap();
        let raw = Array::from_shape_vec(IxDyn(&[2, 3]), values).unwrap();

        let a = add_expand_dim(dense, &[1, 3], &[4, 2]).unwrap();
        let b = add_expand_dim(raw, &[1, 3], &[4, 2]).unwrap();
        assert_eq!(a.shape(), &[2, 4, 3, 2]);
        assert_eq!(a.as_array(), &b);
    }

    #[test]
    fn test_negative_positions_count_from_result_end() {
        let v = DenseND::<f64>::ones(&[5]);
        let out = add_expand_dim(v, &[-2], &[3]).unwrap();
        assert_eq!(out.shape(), &[3, 5]);
    }

    #[test]
    fn test_sizes_follow_their_positions_when_unsorted() {
        let v = DenseND::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
        let out = add_expand_dim(v, &[-1, 0], &[4, 2]).unwrap();
        assert_eq!(out.shape(), &[2, 3, 4]);
        assert_eq!(out[&[1, 2, 3]], 3.0);
    }

    #[test]
    fn test_size_zero_and_one() {
        let v = DenseND::<f64>::ones(&[2]);
        assert_eq!(add_expand_dim(v.clone(), &[0], &[1]).unwrap().shape(), &[1, 2]);
        assert!(add_expand_dim(v, &[0], &[0]).unwrap().is_empty());
    }

    #[test]
    fn test_no_new_axes_is_identity() {
        let v = DenseND::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        assert_eq!(add_expand_dim(v.clone(), &[], &[]).unwrap(), v);
    }

    #[test]
    fn test_rejects_bad_arguments() {
        let v = DenseND::<f64>::ones(&[2]);
        assert!(add_expand_dim(v.clone(), &[0], &[]).is_err());
        assert!(add_expand_dim(v.clone(), &[2], &[3]).is_err());
        let err = add_expand_dim(v, &[0, -3], &[3, 3]).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }
}
