//! Batched triangular-matrix helpers and dense Cholesky decomposition
//!
//! Every routine here treats the last two axes as the matrix axes and the
//! leading axes as a batch, so a `[b0, b1, n, n]` tensor holds `b0 * b1`
//! independent `n x n` matrices.
//!
//! - `tril_indices` - row-major strictly/non-strictly lower positions
//! - `diagonal` / `diag_embed` - diagonal extraction and embedding
//! - `tril` - zero everything above a diagonal offset
//! - `cholesky` - lower factor `L` with `A = L L^T`, via `scirs2_linalg`

use super::types::DenseND;
use anyhow::{bail, Result};
use scirs2_core::ndarray_ext::{Array2, Array3, IxDyn, ScalarOperand};
use scirs2_core::num_traits::NumAssign;
use scirs2_core::numeric::{Float, FromPrimitive, Num, NumCast};
use std::iter::Sum;

/// Positions `(row, col)` of an `n x n` matrix with `col <= row + offset`,
/// enumerated row by row, columns ascending.
///
/// `offset = -1` gives the strictly-lower triangle used for off-diagonal
/// parameter vectors.
///
/// # Examples
///
/// ```
/// use mprl_core::dense::tril_indices;
///
/// assert_eq!(tril_indices(3, -1), vec![(1, 0), (2, 0), (2, 1)]);
/// assert_eq!(tril_indices(2, 0), vec![(0, 0), (1, 0), (1, 1)]);
/// ```
pub fn tril_indices(n: usize, offset: isize) -> Vec<(usize, usize)> {
    let mut indices = Vec::new();
    for row in 0..n {
        for col in 0..n {
            if (col as isize) <= row as isize + offset {
                indices.push((row, col));
            }
        }
    }
    indices
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Split the shape into (batch count, rows, cols) of the trailing matrices.
    fn matrix_dims(&self, op: &str) -> Result<(usize, usize, usize)> {
        let rank = self.rank();
        if rank < 2 {
            bail!("{} requires a tensor of rank >= 2, got rank {}", op, rank);
        }
        let shape = self.shape();
        let batch = shape[..rank - 2].iter().product();
        Ok((batch, shape[rank - 2], shape[rank - 1]))
    }

    /// The trailing matrices stacked along a single batch axis.
    fn matrix_stack(&self, op: &str) -> Result<Array3<T>> {
        let (batch, rows, cols) = self.matrix_dims(op)?;
        let contiguous = self.data.as_standard_layout().into_owned();
        Ok(contiguous.into_shape_with_order((batch, rows, cols))?)
    }

    /// Extract the main diagonal of each trailing square matrix.
    ///
    /// `[..., n, n]` becomes `[..., n]`.
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let m = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(m.diagonal().unwrap().to_vec(), vec![1.0, 4.0]);
    /// ```
    pub fn diagonal(&self) -> Result<Self> {
        let (batch, rows, cols) = self.matrix_dims("diagonal")?;
        if rows != cols {
            bail!("diagonal requires square matrices, got {}x{}", rows, cols);
        }
        let stack = self.matrix_stack("diagonal")?;
        let mut diags = Array2::<T>::zeros((batch, rows));
        for (mut dst, matrix) in diags.outer_iter_mut().zip(stack.outer_iter()) {
            dst.assign(&matrix.diag());
        }
        let mut shape = self.shape()[..self.rank() - 2].to_vec();
        shape.push(rows);
        Ok(Self {
            data: diags.into_shape_with_order(IxDyn(&shape))?,
        })
    }

    /// Embed the last axis as the diagonal of square matrices.
    ///
    /// `[..., n]` becomes `[..., n, n]` with zeros off the diagonal.
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let d = DenseND::from_vec(vec![1.0, 2.0], &[2]).unwrap();
    /// let m = d.diag_embed().unwrap();
    /// assert_eq!(m.to_vec(), vec![1.0, 0.0, 0.0, 2.0]);
    /// ```
    pub fn diag_embed(&self) -> Result<Self> {
        let rank = self.rank();
        if rank == 0 {
            bail!("diag_embed requires a tensor of rank >= 1");
        }
        let n = self.shape()[rank - 1];
        let batch: usize = self.shape()[..rank - 1].iter().product();
        let vectors = self
            .data
            .as_standard_layout()
            .into_owned()
            .into_shape_with_order((batch, n))?;
        let mut stack = Array3::<T>::zeros((batch, n, n));
        for (mut matrix, diag) in stack.outer_iter_mut().zip(vectors.outer_iter()) {
            matrix.diag_mut().assign(&diag);
        }
        let mut shape = self.shape().to_vec();
        shape.push(n);
        Ok(Self {
            data: stack.into_shape_with_order(IxDyn(&shape))?,
        })
    }

    /// Zero every entry above the `offset`-th diagonal of each trailing matrix.
    ///
    /// `offset = 0` keeps the diagonal, `offset = -1` keeps only the strictly
    /// lower triangle.
    pub fn tril(&self, offset: isize) -> Result<Self> {
        self.matrix_dims("tril")?;
        let rank = self.rank();
        let mut data = self.data.clone();
        for (idx, value) in data.indexed_iter_mut() {
            if idx[rank - 1] as isize > idx[rank - 2] as isize + offset {
                *value = T::zero();
            }
        }
        Ok(Self { data })
    }
}

impl<T> DenseND<T>
where
    T: Float + FromPrimitive + NumCast + NumAssign + Sum + Send + Sync + ScalarOperand + 'static,
{
    /// Compute the Cholesky decomposition `A = L L^T` of every trailing matrix.
    ///
    /// Each `n x n` matrix of the batch is factorized by `scirs2_linalg`.
    /// The result has zeros strictly above the diagonal.
    ///
    /// # Errors
    ///
    /// Fails when the tensor is not a (batch of) square matrices, or when a
    /// matrix is not positive definite.
    ///
    /// # Examples
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let a = DenseND::from_vec(vec![4.0_f64, 2.0, 2.0, 3.0], &[2, 2]).unwrap();
    /// let l = a.cholesky().unwrap();
    /// assert!((l[&[0, 0]] - 2.0).abs() < 1e-12);
    /// assert_eq!(l[&[0, 1]], 0.0);
    /// assert!((l[&[1, 0]] - 1.0).abs() < 1e-12);
    /// assert!((l[&[1, 1]] - 2.0_f64.sqrt()).abs() < 1e-12);
    /// ```
    pub fn cholesky(&self) -> Result<Self> {
        let (batch, n, cols) = self.matrix_dims("Cholesky decomposition")?;
        if n != cols {
            bail!("Cholesky decomposition requires square matrices, got {}x{}", n, cols);
        }
        log::debug!("cholesky: factorizing {} matrices of size {}x{}", batch, n, n);
        if n == 0 {
            return Ok(self.clone());
        }

        let stack = self.matrix_stack("Cholesky decomposition")?;
        let mut factors = Array3::<T>::zeros((batch, n, n));
        for (b, (matrix, mut factor)) in stack
            .outer_iter()
            .zip(factors.outer_iter_mut())
            .enumerate()
        {
            let l = scirs2_linalg::cholesky(&matrix, None).map_err(|e| {
                anyhow::anyhow!(
                    "Cholesky decomposition failed for matrix {} (matrix may not be positive definite): {}",
                    b,
                    e
                )
            })?;
            if l.iter().any(|v| !v.is_finite()) {
                bail!(
                    "Cholesky decomposition failed for matrix {}: non-finite factor entries",
                    b
                );
            }
            factor.assign(&l);
        }

        Ok(Self {
            data: factors.into_shape_with_order(IxDyn(self.shape()))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(l: &DenseND<f64>, n: usize) -> Vec<f64> {
        let flat = l.to_vec();
        let mut out = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                out[i * n + j] = (0..n).map(|k| flat[i * n + k] * flat[j * n + k]).sum();
            }
        }
        out
    }

    #[test]
    fn test_tril_indices_counts() {
        for n in 0..6 {
            assert_eq!(tril_indices(n, -1).len(), n * n.saturating_sub(1) / 2);
            assert_eq!(tril_indices(n, 0).len(), n * (n + 1) / 2);
        }
    }

    #[test]
    fn test_diagonal_batched() {
        let t = DenseND::from_vec((0..8).map(|x| x as f64).collect(), &[2, 2, 2]).unwrap();
        let d = t.diagonal().unwrap();
        assert_eq!(d.shape(), &[2, 2]);
        assert_eq!(d.to_vec(), vec![0.0, 3.0, 4.0, 7.0]);
    }

    #[test]
    fn test_diagonal_rejects_vectors_and_rectangles() {
        assert!(DenseND::<f64>::zeros(&[3]).diagonal().is_err());
        assert!(DenseND::<f64>::zeros(&[2, 3]).diagonal().is_err());
    }

    #[test]
    fn test_tril_strict() {
        let t = DenseND::from_vec((1..=9).map(|x| x as f64).collect(), &[3, 3]).unwrap();
        let lower = t.tril(-1).unwrap();
        assert_eq!(
            lower.to_vec(),
            vec![0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 7.0, 8.0, 0.0]
        );
    }

    #[test]
    fn test_cholesky_reconstructs_spd_matrix() {
        let a = vec![25.0, 15.0, -5.0, 15.0, 18.0, 0.0, -5.0, 0.0, 11.0];
        let l = DenseND::from_vec(a.clone(), &[3, 3])
            .unwrap()
            .cholesky()
            .unwrap();
        assert_eq!(l.to_vec()[..3], [5.0, 0.0, 0.0]);
        for (x, y) in reconstruct(&l, 3).iter().zip(&a) {
            assert!((x - y).abs() < 1e-10);
        }
    }

    #[test]
    fn test_cholesky_batched_identity() {
        let eye = DenseND::<f64>::eye(2).broadcast_to(&[3, 2, 2]).unwrap();
        assert_eq!(eye.cholesky().unwrap(), eye);
    }

    #[test]
    fn test_cholesky_rejects_indefinite() {
        let a = DenseND::from_vec(vec![1.0, 2.0, 2.0, 1.0], &[2, 2]).unwrap();
        let err = a.cholesky().unwrap_err();
        assert!(err.to_string().contains("Cholesky decomposition failed"));
    }
}
