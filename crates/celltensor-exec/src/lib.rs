//! # celltensor-exec
//!
//! Cell-modify engine for celltensor.
//!
//! This crate provides:
//! - [`modify`] - apply a cell update set to a tensor with `f(old, new)`
//! - [`modify_with_stats`] and [`modify_with_options`] for applied and
//!   discarded counts and strict mode
//! - [`Tensor`] - the closed sparse/dense tensor value
//! - [`CellFunction`] - named combining functions
//! - [`tracing_support`] - subscriber setup for the engine's events
//!
//! # Example
//!
//! ```
//! use celltensor_core::{TensorSpec, TensorType};
//! use celltensor_exec::{modify, CellFunction, Tensor};
//! use celltensor_sparse::CellValues;
//!
//! let ty = TensorType::sparse(&["x", "y"]).unwrap();
//! let source = Tensor::from_spec(
//!     &TensorSpec::new(ty.clone())
//!         .add([("x", "8"), ("y", "9")], 11.0)
//!         .add([("x", "9"), ("y", "9")], 11.0),
//! )
//! .unwrap();
//!
//! let update_tensor = Tensor::from_spec(
//!     &TensorSpec::new(ty.clone())
//!         .add([("x", "8"), ("y", "9")], 2.0)
//!         .add([("x", "7"), ("y", "9")], 3.0),
//! )
//! .unwrap();
//! let update = CellValues::from_sparse(update_tensor.as_sparse().unwrap());
//!
//! let result = modify(&source, &update, CellFunction::Replace.as_fn()).unwrap();
//! let expected = TensorSpec::new(ty)
//!     .add([("x", "8"), ("y", "9")], 2.0)
//!     .add([("x", "9"), ("y", "9")], 11.0);
//! assert_eq!(result.to_spec(), expected);
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): emit `tracing` events and enable `init_tracing`
//! - `serde`: serialization of [`CellFunction`], [`ModifyOptions`] and [`ModifyStats`]

#![deny(warnings)]

pub mod error;
pub mod function;
pub mod modify;
pub mod options;
pub mod tensor;
pub mod tracing_support;


// Re-exports
pub use error::*;
pub use function::*;
pub use modify::*;
pub use options::*;
pub use tensor::*;
