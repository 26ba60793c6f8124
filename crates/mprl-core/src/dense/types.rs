//! Dense tensor type definition and basic operations
//!
//! This module defines the core `DenseND<T>` type and provides basic creation
//! and accessor methods. Additional operations are organized in separate modules.

use scirs2_core::ndarray_ext::{Array, IxDyn};
use scirs2_core::numeric::Num;

/// Dense N-dimensional tensor backed by scirs2_core's ndarray
///
/// Wraps a dynamic-rank, row-major array. Every operation in this crate
/// returns a fresh tensor; nothing is mutated in place.
///
/// # Type Parameters
///
/// * `T` - The element type (typically `f32` or `f64`)
///
/// # Examples
///
/// ```
/// use mprl_core::DenseND;
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone)]
pub struct DenseND<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Create a tensor from an existing ndarray
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::Array;
    /// use mprl_core::DenseND;
    ///
    /// let arr = Array::<f64, _>::zeros(vec![2, 3]);
    /// let tensor = DenseND::from_array(arr);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Create a tensor from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Examples
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// assert!(DenseND::from_vec(vec![1.0, 2.0], &[3]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Create a tensor filled with a specific value
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let tensor = DenseND::from_elem(&[2, 3], 5.0);
    /// assert_eq!(tensor[&[1, 2]], 5.0);
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Create a tensor of zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::zero())
    }

    /// Create a tensor of ones
    pub fn ones(shape: &[usize]) -> Self {
        Self::from_elem(shape, T::one())
    }

    /// Get the rank (number of dimensions) of this tensor
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Get the shape of this tensor
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Get a copy of the shape as a vector.
    pub fn shape_vec(&self) -> Vec<usize> {
        self.shape().to_vec()
    }

    /// Get the total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor is empty (has zero elements)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy the elements out in logical row-major order.
    ///
    /// Works for any memory layout, unlike a raw slice of the storage.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// Get an immutable reference to the underlying ndarray
    pub fn as_array(&self) -> &Array<T, IxDyn> {
        &self.data
    }

    /// Consume the tensor and return the underlying ndarray
    pub fn into_array(self) -> Array<T, IxDyn> {
        self.data
    }
}
