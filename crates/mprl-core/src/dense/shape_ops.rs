//! Shape manipulation operations on tensors
//!
//! Reshape, permutation, axis insertion and broadcasting.

use super::types::DenseND;
use scirs2_core::ndarray_ext::{Axis, IxDyn};
use scirs2_core::numeric::Num;

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Reshape the tensor to a new shape
    ///
    /// # Examples
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// let reshaped = tensor.reshape(&[6, 4]).unwrap();
    /// assert_eq!(reshaped.shape(), &[6, 4]);
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> anyhow::Result<Self> {
        let new_size: usize = new_shape.iter().product();
        let old_size = self.len();
        if new_size != old_size {
            anyhow::bail!(
                "Cannot reshape tensor of size {} into shape {:?} (size {})",
                old_size,
                new_shape,
                new_size
            );
        }
        if let Ok(reshaped) = self.data.view().into_shape_with_order(IxDyn(new_shape)) {
            Ok(Self {
                data: reshaped.to_owned(),
            })
        } else {
            Self::from_vec(self.to_vec(), new_shape)
        }
    }

    /// Permute (transpose) the axes of the tensor.
    ///
    /// # Errors
    ///
    /// Returns an error if `axes` is not a permutation of `0..rank`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
    /// let permuted = tensor.permute(&[2, 0, 1]).unwrap();
    /// assert_eq!(permuted.shape(), &[4, 2, 3]);
    /// ```
    pub fn permute(&self, axes: &[usize]) -> anyhow::Result<Self> {
        if axes.len() != self.rank() {
            anyhow::bail!(
                "Permutation axes length {} does not match tensor rank {}",
                axes.len(),
                self.rank()
            );
        }
        let mut seen = vec![false; self.rank()];
        for &axis in axes {
            if axis >= self.rank() {
                anyhow::bail!("Invalid axis {} for rank {}", axis, self.rank());
            }
            if seen[axis] {
                anyhow::bail!("Duplicate axis {} in permutation", axis);
            }
            seen[axis] = true;
        }
        let permuted = self.data.clone().permuted_axes(IxDyn(axes));
        Ok(Self { data: permuted })
    }

    /// Add a singleton dimension at the specified axis.
    ///
    /// # Errors
    ///
    /// Returns an error if `axis > rank`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::zeros(&[3, 5]);
    /// let unsqueezed = tensor.unsqueeze(1).unwrap();
    /// assert_eq!(unsqueezed.shape(), &[3, 1, 5]);
    /// ```
    pub fn unsqueeze(&self, axis: usize) -> anyhow::Result<Self> {
        if axis > self.rank() {
            anyhow::bail!(
                "Axis {} out of bounds for result rank {}",
                axis,
                self.rank() + 1
            );
        }
        Ok(Self {
            data: self.data.clone().insert_axis(Axis(axis)),
        })
    }

    /// Broadcast the tensor to `shape`, materializing the replicated values.
    ///
    /// Follows the usual trailing-axis alignment: every source axis must be
    /// either 1 or equal to the target size.
    ///
    /// # Examples
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let row = DenseND::from_vec(vec![1.0, 2.0, 3.0], &[1, 3]).unwrap();
    /// let grid = row.broadcast_to(&[2, 3]).unwrap();
    /// assert_eq!(grid.to_vec(), vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
    /// ```
    pub fn broadcast_to(&self, shape: &[usize]) -> anyhow::Result<Self> {
        let view = self.data.broadcast(IxDyn(shape)).ok_or_else(|| {
            anyhow::anyhow!(
                "Cannot broadcast tensor of shape {:?} to {:?}",
                self.shape(),
                shape
            )
        })?;
        Ok(Self {
            data: view.to_owned(),
        })
    }
}
