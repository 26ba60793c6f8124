//! Tensor creation methods with structured fill patterns
//!
//! This module provides identity matrices and linearly spaced vectors.

use super::types::DenseND;
use scirs2_core::numeric::{Float, FromPrimitive, Num};

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Create an identity matrix (2D tensor with ones on the diagonal)
    ///
    /// # Examples
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let identity = DenseND::<f64>::eye(3);
    /// assert_eq!(identity.shape(), &[3, 3]);
    /// assert_eq!(identity[&[1, 1]], 1.0);
    /// assert_eq!(identity[&[0, 1]], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut data = Self::zeros(&[n, n]);
        for i in 0..n {
            data[&[i, i]] = T::one();
        }
        data
    }
}

/// Fraction `i / (num - 1)` used as the interpolation weight of step `i`.
///
/// The first and last steps are pinned to exactly 0 and 1.
pub fn linspace_weight<T: Float + FromPrimitive>(i: usize, num: usize) -> T {
    if i == 0 || num < 2 {
        return T::zero();
    }
    if i == num - 1 {
        return T::one();
    }
    let numer = T::from_usize(i).unwrap_or_else(T::zero);
    let denom = T::from_usize(num - 1).unwrap_or_else(T::one);
    numer / denom
}

impl<T> DenseND<T>
where
    T: Float + FromPrimitive,
{
    /// Create a 1D tensor with linearly spaced values
    ///
    /// Both `start` and `stop` are inclusive and reproduced exactly at the
    /// ends; `num == 0` yields an empty tensor and `num == 1` yields `[start]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::linspace(0.0, 10.0, 5);
    /// assert_eq!(tensor.shape(), &[5]);
    /// assert_eq!(tensor[&[0]], 0.0);
    /// assert_eq!(tensor[&[2]], 5.0);
    /// assert_eq!(tensor[&[4]], 10.0);
    /// ```
    pub fn linspace(start: T, stop: T, num: usize) -> Self {
        let data: Vec<T> = (0..num)
            .map(|i| lerp_scalar(start, stop, linspace_weight(i, num)))
            .collect();
        Self::from_array(
            scirs2_core::ndarray_ext::Array::from_vec(data).into_dyn(),
        )
    }
}

/// `start + (end - start) * w`, returning the bounds exactly at `w == 0` and `w == 1`.
pub fn lerp_scalar<T: Float>(start: T, end: T, weight: T) -> T {
    if weight == T::zero() {
        start
    } else if weight == T::one() {
        end
    } else {
        start + (end - start) * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_small_counts() {
        assert!(DenseND::<f64>::linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(DenseND::<f64>::linspace(1.0, 2.0, 1).to_vec(), vec![1.0]);
    }

    #[test]
    fn test_linspace_integer_steps() {
        let t = DenseND::<f64>::linspace(2.0, 5.0, 4);
        assert_eq!(t.to_vec(), vec![2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_linspace_descending() {
        let t = DenseND::<f32>::linspace(1.0, 0.0, 3);
        assert_eq!(t.to_vec(), vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_linspace_weight_pins_ends() {
        assert_eq!(linspace_weight::<f64>(0, 7), 0.0);
        assert_eq!(linspace_weight::<f64>(6, 7), 1.0);
        assert!((linspace_weight::<f64>(3, 7) - 0.5).abs() < 1e-15);
    }
}
