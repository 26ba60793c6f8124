//! Element-wise operations on tensors
//!
//! This module provides element-wise mathematical operations and transformations
//! including exponentiation, flooring, clipping and linear interpolation.

use super::creation::lerp_scalar;
use super::types::DenseND;
use scirs2_core::ndarray_ext::Zip;
use scirs2_core::numeric::{Float, Num};

impl<T> DenseND<T>
where
    T: Clone + Num + PartialOrd,
{
    /// Apply element-wise clipping to the range `[min_val, max_val]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let clipped = tensor.clip(2.0, 5.0);
    ///
    /// assert_eq!(clipped[&[0, 0]], 2.0); // 1.0 clipped to 2.0
    /// assert_eq!(clipped[&[0, 2]], 3.0);
    /// assert_eq!(clipped[&[1, 2]], 5.0); // 6.0 clipped to 5.0
    /// ```
    pub fn clip(&self, min_val: T, max_val: T) -> Self {
        let clipped = self.data.mapv(|x| {
            if x < min_val {
                min_val.clone()
            } else if x > max_val {
                max_val.clone()
            } else {
                x
            }
        });
        Self { data: clipped }
    }
}

impl<T> DenseND<T>
where
    T: Float,
{
    /// Apply element-wise exponential (e^x).
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::from_vec(vec![0.0, 1.0], &[2]).unwrap();
    /// let exp_tensor = tensor.exp();
    /// assert_eq!(exp_tensor[&[0]], 1.0);
    /// assert!((exp_tensor[&[1]] - std::f64::consts::E).abs() < 1e-12);
    /// ```
    pub fn exp(&self) -> Self {
        Self {
            data: self.data.mapv(|x| x.exp()),
        }
    }

    /// Round each element down to the nearest integer.
    pub fn floor(&self) -> Self {
        Self {
            data: self.data.mapv(|x| x.floor()),
        }
    }

    /// Linear interpolation `self + weight * (end - self)`, element-wise.
    ///
    /// All three tensors must share one shape. A weight of exactly 0 or 1
    /// returns the corresponding endpoint unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let a = DenseND::from_vec(vec![0.0, 10.0], &[2]).unwrap();
    /// let b = DenseND::from_vec(vec![10.0, 20.0], &[2]).unwrap();
    /// let w = DenseND::from_vec(vec![0.5, 1.0], &[2]).unwrap();
    /// let out = a.lerp(&b, &w).unwrap();
    /// assert_eq!(out.to_vec(), vec![5.0, 20.0]);
    /// ```
    pub fn lerp(&self, end: &Self, weight: &Self) -> anyhow::Result<Self> {
        if self.shape() != end.shape() || self.shape() != weight.shape() {
            anyhow::bail!(
                "lerp requires equal shapes, got {:?}, {:?} and {:?}",
                self.shape(),
                end.shape(),
                weight.shape()
            );
        }
        let data = Zip::from(&self.data)
            .and(&end.data)
            .and(&weight.data)
            .map_collect(|&s, &e, &w| lerp_scalar(s, e, w));
        Ok(Self { data })
    }
}

#[cfg(test)]
mod tests {
    use crate::DenseND;

    #[test]
    fn test_floor_negative_values() {
        let t = DenseND::from_vec(vec![-1.5, -0.0, 0.7, 2.0], &[4]).unwrap();
        assert_eq!(t.floor().to_vec(), vec![-2.0, -0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_lerp_rejects_shape_mismatch() {
        let a = DenseND::<f64>::zeros(&[2]);
        let b = DenseND::<f64>::zeros(&[3]);
        assert!(a.lerp(&b, &a).is_err());
    }

    #[test]
    fn test_lerp_extrapolates_outside_unit_interval() {
        let a = DenseND::from_vec(vec![0.0], &[1]).unwrap();
        let b = DenseND::from_vec(vec![10.0], &[1]).unwrap();
        let w = DenseND::from_vec(vec![-1.0], &[1]).unwrap();
        assert_eq!(a.lerp(&b, &w).unwrap().to_vec(), vec![-10.0]);
    }
}
