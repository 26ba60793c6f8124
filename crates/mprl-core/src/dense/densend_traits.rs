//! # DenseND - Trait Implementations
//!
//! - `Index` / `IndexMut` by multi-dimensional index
//! - `Debug`
//! - `PartialEq` (shape and element-wise equality)

use super::types::DenseND;
use scirs2_core::ndarray_ext::IxDyn;
use std::fmt;

impl<T> std::ops::Index<&[usize]> for DenseND<T> {
    type Output = T;
    fn index(&self, index: &[usize]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T> std::ops::IndexMut<&[usize]> for DenseND<T> {
    fn index_mut(&mut self, index: &[usize]) -> &mut Self::Output {
        &mut self.data[IxDyn(index)]
    }
}

impl<T, const N: usize> std::ops::Index<&[usize; N]> for DenseND<T> {
    type Output = T;
    fn index(&self, index: &[usize; N]) -> &Self::Output {
        &self.data[IxDyn(index)]
    }
}

impl<T, const N: usize> std::ops::IndexMut<&[usize; N]> for DenseND<T> {
    fn index_mut(&mut self, index: &[usize; N]) -> &mut Self::Output {
        &mut self.data[IxDyn(index)]
    }
}

impl<T: fmt::Debug> fmt::Debug for DenseND<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseND")
            .field("shape", &self.data.shape())
            .field("rank", &self.data.ndim())
            .field("data", &self.data)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DenseND<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
