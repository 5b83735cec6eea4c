//! Unified error types for sparse tensors and update sets
//!
//! # Design
//!
//! - **`SparseError`**: Top-level enum for this crate
//! - **`CellValuesError`**: Problems building a cell update set
//! - Core construction errors are wrapped from `celltensor_core::CoreError`
//!
//! # Examples
//!
//! ```
//! use celltensor_sparse::{CellValues, CellValuesError, SparseError};
//!
//! fn build() -> Result<CellValues, SparseError> {
//!     Ok(CellValues::new(["x", "x"])?)
//! }
//!
//! assert!(matches!(
//!     build(),
//!     Err(SparseError::CellValues(CellValuesError::DuplicateDimension { .. }))
//! ));
//! ```

use celltensor_core::CoreError;
use thiserror::Error;

/// Top-level error type for sparse tensor operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseError {
    /// Type, address or spec errors from the core crate
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Cell update set errors
    #[error("Cell values error: {0}")]
    CellValues(#[from] CellValuesError),
}

/// Errors building a cell update set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CellValuesError {
    #[error("Dimension name cannot be empty")]
    EmptyDimensionName,

    #[error("Duplicate dimension '{name}' in cell values")]
    DuplicateDimension { name: String },

    #[error("Address has {actual} labels but cell values have {expected} dimensions")]
    RankMismatch { expected: usize, actual: usize },
}

/// Result type alias for sparse tensor operations
pub type SparseResult<T> = Result<T, SparseError>;
