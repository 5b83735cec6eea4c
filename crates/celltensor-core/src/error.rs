//! Error types for tensor construction
//!
//! Everything that can go wrong while building a [`TensorType`](crate::TensorType),
//! an [`Address`](crate::Address) or a tensor value ends up in [`CoreError`].
//! Cell-level problems during a modify never surface here; they are dropped by
//! the engine in `celltensor-exec`.
//!
//! # Examples
//!
//! ```
//! use celltensor_core::{CoreError, Dimension, TensorType};
//!
//! let err = TensorType::new(vec![Dimension::mapped("x"), Dimension::mapped("x")]).unwrap_err();
//! assert!(matches!(err, CoreError::DuplicateDimension { .. }));
//! ```

use thiserror::Error;

/// Errors raised while building tensor types, addresses and tensors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Dimension name cannot be empty")]
    EmptyDimensionName,

    #[error("Duplicate dimension '{name}' in tensor type")]
    DuplicateDimension { name: String },

    #[error("Indexed dimension '{name}' must have a positive extent")]
    ZeroExtent { name: String },

    #[error("Type {tensor_type} has more cells than fit in usize")]
    VolumeOverflow { tensor_type: String },

    #[error("Unknown dimension '{name}' for type {tensor_type}")]
    UnknownDimension { name: String, tensor_type: String },

    #[error("Missing label for dimension '{name}'")]
    MissingDimension { name: String },

    #[error("Address has {actual} labels but type has {expected} dimensions")]
    RankMismatch { expected: usize, actual: usize },

    #[error("Label '{label}' is not a valid index for dimension '{dimension}'")]
    InvalidIndex { dimension: String, label: String },

    #[error("Index {index} out of range for dimension '{dimension}' of size {extent}")]
    IndexOutOfRange {
        dimension: String,
        index: usize,
        extent: usize,
    },

    #[error("Type {tensor_type} holds {expected} cells, but got {actual} values")]
    VolumeMismatch {
        tensor_type: String,
        expected: usize,
        actual: usize,
    },

    #[error("Type {tensor_type} mixes mapped and indexed dimensions")]
    MixedType { tensor_type: String },

    #[error("Expected a {expected} type, got {tensor_type}")]
    WrongKind {
        expected: &'static str,
        tensor_type: String,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_mismatch_message() {
        let err = CoreError::RankMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Address has 3 labels but type has 2 dimensions"
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = CoreError::IndexOutOfRange {
            dimension: "x".to_string(),
            index: 10,
            extent: 10,
        };
        assert_eq!(
            err.to_string(),
            "Index 10 out of range for dimension 'x' of size 10"
        );
    }
}
