//! # mprl-util
//!
//! Matrix and tensor helpers for movement-primitive learning, built on
//! [`mprl_core::DenseND`].
//!
//! - **Lower-triangular assembly**: [`build_lower_matrix`] and its inverse
//!   [`reverse_build_matrix`]
//! - **Cholesky factors**: [`transform_to_cholesky`] maps any square matrix
//!   to a valid factor; [`to_cholesky`] obtains one from parameter vectors, an
//!   explicit factor or a covariance matrix
//! - **Broadcasting**: [`add_expand_dim`]
//! - **Interpolation**: [`tensor_linspace`] and [`indexing_interpolate`]
//! - **Slicing**: [`get_sub_tensor`] with [`AxisSelector`] descriptors
//!
//! Every function is pure and returns a fresh tensor. Leading axes of matrix
//! arguments are batch axes.
//!
//! ## Quick Start
//!
//! ```
//! use mprl_core::DenseND;
//! use mprl_util::{build_lower_matrix, reverse_build_matrix};
//!
//! let diag = DenseND::from_vec(vec![1.0, 2.0, 3.0], &[3]).unwrap();
//! let off = DenseND::from_vec(vec![4.0, 5.0, 6.0], &[3]).unwrap();
//! let l = build_lower_matrix(&diag, Some(&off)).unwrap();
//! assert_eq!(l.to_vec(), vec![1.0, 0.0, 0.0, 4.0, 2.0, 0.0, 5.0, 6.0, 3.0]);
//!
//! let (d, o) = reverse_build_matrix(&l, true).unwrap();
//! assert_eq!(d, diag);
//! assert_eq!(o, Some(off));
//! ```
//!
//! ## Error Handling
//!
//! All utilities return [`MatrixResult`]; failures of the tensor primitives
//! surface as [`MatrixError::Tensor`].

pub mod cholesky;
pub mod error;
pub mod expand;
pub mod interpolate;
pub mod lower;
pub mod slicing;


pub use cholesky::{resolve_cholesky_source, to_cholesky, transform_to_cholesky, CholeskySource};
pub use error::{MatrixError, MatrixResult};
pub use expand::{add_expand_dim, ExpandDims};
pub use interpolate::{
    indexing_interpolate, tensor_linspace, tensor_linspace_with, LinspaceBound, LinspaceLayout,
};
pub use lower::{build_lower_matrix, num_off_diag, reverse_build_matrix};
pub use slicing::{get_sub_tensor, AxisSelector};
