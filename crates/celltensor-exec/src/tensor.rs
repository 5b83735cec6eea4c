//! The tensor value handled by the modify engine
//!
//! [`Tensor`] is a closed sum of the two supported representations. The
//! engine matches on it once per modify and returns the same variant.

use crate::error::ModifyResult;
use crate::modify::modify;
use celltensor_core::{CoreError, DenseTensor, TensorSpec, TensorType};
use celltensor_sparse::{CellValues, SparseTensor};

/// A sparse or dense tensor
///
/// # Examples
///
/// ```
/// use celltensor_core::{TensorSpec, TensorType};
/// use celltensor_exec::Tensor;
///
/// let spec = TensorSpec::new(TensorType::sparse(&["x"]).unwrap()).add([("x", "a")], 1.0);
/// let tensor = Tensor::from_spec(&spec).unwrap();
/// assert!(tensor.is_sparse());
/// assert_eq!(tensor.to_spec(), spec);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Tensor {
    /// All dimensions mapped
    Sparse(SparseTensor),
    /// All dimensions indexed (and rank 0)
    Dense(DenseTensor),
}

impl Tensor {
    /// Build the representation matching the described type
    ///
    /// All-indexed types (rank 0 included) become dense, all-mapped types
    /// sparse.
    ///
    /// # Errors
    ///
    /// [`CoreError::MixedType`] for a type mixing mapped and indexed
    /// dimensions, or any error building the tensor.
    pub fn from_spec(spec: &TensorSpec) -> ModifyResult<Self> {
        let tensor_type = spec.tensor_type();
        if tensor_type.is_dense() {
            Ok(Tensor::Dense(DenseTensor::from_spec(spec)?))
        } else if tensor_type.is_sparse() {
            Ok(Tensor::Sparse(SparseTensor::from_spec(spec)?))
        } else {
            Err(CoreError::MixedType {
                tensor_type: tensor_type.to_string(),
            }
            .into())
        }
    }

    /// Describe this tensor; dense descriptions list every cell
    pub fn to_spec(&self) -> TensorSpec {
        match self {
            Tensor::Sparse(tensor) => tensor.to_spec(),
            Tensor::Dense(tensor) => tensor.to_spec(),
        }
    }

    /// The tensor type
    pub fn tensor_type(&self) -> &TensorType {
        match self {
            Tensor::Sparse(tensor) => tensor.tensor_type(),
            Tensor::Dense(tensor) => tensor.tensor_type(),
        }
    }

    /// Check if this is the sparse representation
    pub fn is_sparse(&self) -> bool {
        matches!(self, Tensor::Sparse(_))
    }

    /// Check if this is the dense representation
    pub fn is_dense(&self) -> bool {
        matches!(self, Tensor::Dense(_))
    }

    /// Get the sparse tensor if this is one
    pub fn as_sparse(&self) -> Option<&SparseTensor> {
        match self {
            Tensor::Sparse(tensor) => Some(tensor),
            Tensor::Dense(_) => None,
        }
    }

    /// Get the dense tensor if this is one
    pub fn as_dense(&self) -> Option<&DenseTensor> {
        match self {
            Tensor::Dense(tensor) => Some(tensor),
            Tensor::Sparse(_) => None,
        }
    }

    /// Method form of [`modify`]
    pub fn modify<F>(&self, update: &CellValues, f: F) -> ModifyResult<Tensor>
    where
        F: Fn(f64, f64) -> f64,
    {
        modify(self, update, f)
    }
}

impl From<SparseTensor> for Tensor {
    fn from(tensor: SparseTensor) -> Self {
        Tensor::Sparse(tensor)
    }
}

impl From<DenseTensor> for Tensor {
    fn from(tensor: DenseTensor) -> Self {
        Tensor::Dense(tensor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModifyError;
    use celltensor_core::Dimension;

    #[test]
    fn test_from_spec_selects_representation() {
        let sparse = TensorSpec::new(TensorType::sparse(&["x"]).unwrap());
        assert!(Tensor::from_spec(&sparse).unwrap().is_sparse());

        let dense = TensorSpec::new(TensorType::dense(&[("x", 2usize)]).unwrap());
        assert!(Tensor::from_spec(&dense).unwrap().is_dense());

        let scalar = TensorSpec::new(TensorType::scalar());
        assert!(Tensor::from_spec(&scalar).unwrap().is_dense());
    }

    #[test]
    fn test_from_spec_rejects_mixed() {
        let ty = TensorType::new(vec![Dimension::indexed("x", 2), Dimension::mapped("y")]).unwrap();
        let result = Tensor::from_spec(&TensorSpec::new(ty));
        assert!(matches!(
            result,
            Err(ModifyError::Core(CoreError::MixedType { .. }))
        ));
    }

    #[test]
    fn test_accessors() {
        let ty = TensorType::dense(&[("x", 2usize)]).unwrap();
        let tensor = Tensor::from(DenseTensor::zeros(ty.clone()).unwrap());
        assert_eq!(tensor.tensor_type(), &ty);
        assert!(tensor.as_dense().is_some());
        assert!(tensor.as_sparse().is_none());
        assert_eq!(tensor.to_spec().len(), 2);
    }
}
