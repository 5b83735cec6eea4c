//! # celltensor-core
//!
//! Core tensor types, addresses, dense storage and tensor descriptions for
//! celltensor.
//!
//! This crate provides the foundational building blocks of the cell-modify
//! stack:
//!
//! - **Labels and addresses** ([`Label`], [`Address`]) with a total
//!   label → index conversion
//! - **Tensor types** ([`TensorType`]) made of mapped and indexed
//!   [`Dimension`]s
//! - **Dense tensors** ([`DenseTensor`]) over row-major storage ([`DenseND`])
//! - **Tensor descriptions** ([`TensorSpec`]) used to build tensors and to
//!   compare them by content
//!
//! Sparse tensors and update sets live in `celltensor-sparse`; the modify
//! engine lives in `celltensor-exec`.
//!
//! ## Core Principles
//!
//! ### SciRS2 Integration
//!
//! Dense storage uses `scirs2-core` arrays and numeric traits rather than
//! depending on `ndarray` or `num-traits` directly.
//!
//! ### Immutability
//!
//! Tensors are value objects. Nothing in this crate mutates a tensor in
//! place after construction; operations produce new tensors.
//!
//! ## Quick Start
//!
//! ```
//! use celltensor_core::{Address, DenseTensor, TensorSpec, TensorType};
//!
//! let ty = TensorType::dense(&[("x", 10), ("y", 10)]).unwrap();
//! let spec = TensorSpec::new(ty)
//!     .add([("x", 8usize), ("y", 9usize)], 11.0)
//!     .add([("x", 9usize), ("y", 9usize)], 11.0);
//!
//! let tensor = DenseTensor::from_spec(&spec).unwrap();
//! assert_eq!(tensor.volume(), 100);
//! assert_eq!(tensor.get_address(&Address::new(["8", "9"])), Some(11.0));
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of labels, addresses and types

#![deny(warnings)]

pub mod address;
pub mod dense;
pub mod error;
pub mod spec;
pub mod types;


pub use address::{parse_index, Address, Label, Labels};
pub use dense::{DenseND, DenseTensor};
pub use error::{CoreError, CoreResult};
pub use spec::TensorSpec;
pub use types::{Axis, Dimension, DimensionKind, Shape, TensorType};
