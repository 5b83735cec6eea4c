//! Error types for the modify engine
//!
//! Per-cell problems never surface here: they are discarded and counted in
//! [`ModifyStats`](crate::ModifyStats). A [`ModifyError`] means the whole
//! operation was refused and no result was produced.

use celltensor_core::CoreError;
use celltensor_sparse::SparseError;
use thiserror::Error;

/// Errors that abort a modify, or building tensors for one
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModifyError {
    /// Update set dimensions are not exactly the source's dimensions
    #[error("Update dimensions {actual:?} do not match tensor dimensions {expected:?}")]
    DimensionMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    /// Update address with the wrong number of labels
    #[error("Update address has {actual} labels, expected {expected}")]
    MalformedAddress { expected: usize, actual: usize },

    /// Strict modify with discarded cells
    #[error("Strict modify rejected: {discarded} of {total} update cells discarded")]
    Rejected { discarded: usize, total: usize },

    /// Unrecognized combining function name
    #[error("Unknown cell function '{name}' (expected replace, add, multiply, max or min)")]
    UnknownFunction { name: String },

    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Sparse error: {0}")]
    Sparse(#[from] SparseError),
}

/// Result type alias for modify operations
pub type ModifyResult<T> = Result<T, ModifyError>;
