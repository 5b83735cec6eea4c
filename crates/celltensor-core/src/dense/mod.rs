//! Dense tensors
//!
//! [`DenseND`] is the row-major cell storage; [`DenseTensor`] pairs it with
//! an all-indexed [`TensorType`](crate::TensorType).

// Storage type definition
pub mod types;

// Typed tensor over the storage
mod tensor;

// Re-export the main types
pub use tensor::DenseTensor;
pub use types::DenseND;
