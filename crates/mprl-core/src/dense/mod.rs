//! Dense tensor implementation and operations
//!
//! The tensor type lives in `types`; each sibling module adds one family of
//! operations to it.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod arithmetic;
mod creation;
mod elementwise;
mod indexing;
mod linalg;
mod shape_ops;

// Supporting modules
pub mod densend_traits;

// Re-export the main type
pub use types::DenseND;

pub use creation::{lerp_scalar, linspace_weight};
pub use linalg::tril_indices;
