//! # celltensor - Cell-Modify Engine for Sparse and Dense Tensors
//!
//! Apply a sparse set of per-cell updates to a tensor, combining each
//! addressed cell with `f(old, new)` and leaving every other cell as it was.
//!
//! This is the **meta crate** that re-exports all celltensor components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use celltensor::prelude::*;
//!
//! let ty = TensorType::dense(&[("x", 10), ("y", 10)])?;
//! let source = Tensor::from_spec(&TensorSpec::new(ty).add([("x", 8usize), ("y", 9usize)], 11.0))?;
//!
//! let mut update = CellValues::new(["x", "y"])?;
//! update.insert(Address::new(["8", "9"]), 2.0)?;
//!
//! let result = modify(&source, &update, CellFunction::Add.as_fn())?;
//! assert_eq!(result.as_dense().unwrap().get(&[8, 9]), Some(13.0));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core Types ([`core`])
//!
//! Labels, addresses, tensor types, dense storage and tensor descriptions.
//!
//! ```
//! use celltensor::core::{Label, TensorType};
//!
//! assert_eq!(Label::from("42").as_index(), Some(42));
//! let ty = TensorType::sparse(&["x", "y"]).unwrap();
//! assert_eq!(ty.to_string(), "tensor(x{},y{})");
//! ```
//!
//! ### Sparse Tensors and Update Sets ([`sparse`])
//!
//! Mapped tensors keyed by string labels, and the cell update sets
//! extracted from them.
//!
//! ### Modify Engine ([`exec`])
//!
//! `modify`, statistics, strict options and logging setup.
//!
//! ## Features
//!
//! - `tracing` (default): Emit `tracing` events from the engine
//! - `serde`: Serialization of labels, types, functions and stats
//! - `full`: Enable all features

#![deny(warnings)]

// Re-export all components
pub use celltensor_core as core;
pub use celltensor_exec as exec;
pub use celltensor_sparse as sparse;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use celltensor::prelude::*;
    //!
    //! let update = CellValues::new(["x"]).unwrap();
    //! assert!(update.is_empty());
    //! ```

    // Core types
    pub use crate::core::{Address, DenseTensor, Dimension, Label, TensorSpec, TensorType};

    // Sparse types
    pub use crate::sparse::{CellValues, SparseTensor};

    // Modify engine
    pub use crate::exec::{
        modify, modify_with_options, modify_with_stats, CellFunction, ModifyError,
        ModifyOptions, ModifyStats, Tensor,
    };
}
