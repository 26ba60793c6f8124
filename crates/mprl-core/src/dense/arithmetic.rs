//! Tensor-tensor arithmetic operators
//!
//! `&a + &b` and `&a - &b` follow ndarray's broadcasting rules.
//!
//! # Panics
//!
//! Both operators panic when the shapes cannot be broadcast together. Use
//! [`DenseND::broadcast_to`] first to get an error instead.

use super::types::DenseND;
use scirs2_core::numeric::Num;

impl<'b, T> std::ops::Add<&'b DenseND<T>> for &DenseND<T>
where
    T: Clone + Num,
{
    type Output = DenseND<T>;

    fn add(self, rhs: &'b DenseND<T>) -> Self::Output {
        DenseND {
            data: &self.data + &rhs.data,
        }
    }
}

impl<'b, T> std::ops::Sub<&'b DenseND<T>> for &DenseND<T>
where
    T: Clone + Num,
{
    type Output = DenseND<T>;

    fn sub(self, rhs: &'b DenseND<T>) -> Self::Output {
        DenseND {
            data: &self.data - &rhs.data,
        }
    }
}
