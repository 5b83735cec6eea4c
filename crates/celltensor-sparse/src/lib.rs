//! # celltensor-sparse
//!
//! Sparse tensors and cell update sets for celltensor.
//!
//! This crate provides:
//! - [`SparseTensor`]: an all-mapped tensor holding only the cells that were
//!   inserted at construction
//! - [`CellValues`]: a sparse address → value mapping describing what changed,
//!   extracted from a sparse or dense tensor
//! - Unified error types ([`SparseError`], [`CellValuesError`])

#![deny(warnings)]

pub mod cells;
pub mod error;
pub mod sparse;

// Re-exports
pub use cells::*;
pub use error::*;
pub use sparse::*;
