//! # mprl-core
//!
//! Dense N-dimensional tensor primitives for the MPRL matrix utilities.
//!
//! [`DenseND`] wraps a dynamic-rank `ndarray` array (through `scirs2-core`) and
//! adds exactly the building blocks the utilities are assembled from:
//!
//! - **Creation**: `zeros`, `from_vec`, `eye`, inclusive `linspace`
//! - **Shape operations**: `reshape`, `permute`, `unsqueeze`, `broadcast_to`
//! - **Selection**: `index_axis`, `slice_axis`, `select`
//! - **Element-wise math**: `exp`, `floor`, `clip`, `lerp`, and `+`/`-` between
//!   tensors of one shape
//! - **Batched triangular algebra**: `diagonal`, `diag_embed`, `tril`,
//!   [`tril_indices`](dense::tril_indices) and `cholesky`
//!
//! Matrix routines treat the last two axes as the matrix and every leading
//! axis as a batch.
//!
//! ## Quick Start
//!
//! ```
//! use mprl_core::DenseND;
//!
//! let cov = DenseND::from_vec(vec![4.0, 2.0, 2.0, 3.0], &[2, 2]).unwrap();
//! let l = cov.cholesky().unwrap();
//! assert_eq!(l[&[0, 1]], 0.0);
//!
//! let d = l.diagonal().unwrap();
//! assert_eq!(d.shape(), &[2]);
//! ```
//!
//! ## Error Handling
//!
//! Operations return `anyhow::Result<T>`:
//!
//! ```
//! use mprl_core::DenseND;
//!
//! let tensor = DenseND::<f64>::zeros(&[2, 3]);
//! assert!(tensor.reshape(&[7]).is_err());
//! assert!(tensor.cholesky().is_err());
//! ```

pub mod dense;


pub use dense::DenseND;
