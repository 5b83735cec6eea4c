//! Dense tensor: an all-indexed type plus its full cell buffer.

use super::types::DenseND;
use crate::address::{Address, Label};
use crate::error::{CoreError, CoreResult};
use crate::spec::TensorSpec;
use crate::types::{Shape, TensorType};

/// Tensor whose dimensions are all indexed.
///
/// Every in-range address has a value; cells never written hold 0.0. The
/// buffer length always equals the type's volume. Values are immutable
/// through this type: operations build new tensors via [`rebuild_with`].
///
/// [`rebuild_with`]: DenseTensor::rebuild_with
///
/// # Examples
///
/// ```
/// use celltensor_core::{DenseTensor, TensorType};
///
/// let ty = TensorType::dense(&[("x", 2usize), ("y", 2usize)]).unwrap();
/// let tensor = DenseTensor::from_vec(ty, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(tensor.get(&[1, 0]), Some(3.0));
/// assert_eq!(tensor.get(&[2, 0]), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DenseTensor {
    tensor_type: TensorType,
    cells: DenseND<f64>,
}

impl DenseTensor {
    /// All-zero tensor of the given type
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::WrongKind`] if the type has a mapped dimension.
    pub fn zeros(tensor_type: TensorType) -> CoreResult<Self> {
        check_dense(&tensor_type)?;
        let cells = DenseND::zeros(&tensor_type.shape());
        Ok(Self { tensor_type, cells })
    }

    /// Tensor from row-major values
    ///
    /// # Errors
    ///
    /// Returns an error if the type is not dense or `values.len()` differs
    /// from the type's volume.
    pub fn from_vec(tensor_type: TensorType, values: Vec<f64>) -> CoreResult<Self> {
        check_dense(&tensor_type)?;
        if values.len() != tensor_type.volume() {
            return Err(CoreError::VolumeMismatch {
                tensor_type: tensor_type.to_string(),
                expected: tensor_type.volume(),
                actual: values.len(),
            });
        }
        let cells = DenseND::from_vec(values, &tensor_type.shape())
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        Ok(Self { tensor_type, cells })
    }

    /// Tensor with the listed cells set and every other cell 0.0
    ///
    /// Addresses may use numeric string labels. A repeated address keeps the
    /// last value.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed or out-of-range address.
    pub fn from_cells<I>(tensor_type: TensorType, cells: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (Address, f64)>,
    {
        let mut tensor = Self::zeros(tensor_type)?;
        for (address, value) in cells {
            let index = tensor.checked_indices(&address)?;
            if let Some(cell) = tensor.cells.get_mut(&index) {
                *cell = value;
            }
        }
        Ok(tensor)
    }

    /// Build from a tensor description, padding absent cells with 0.0
    pub fn from_spec(spec: &TensorSpec) -> CoreResult<Self> {
        Self::from_cells(
            spec.tensor_type().clone(),
            spec.cells().map(|(address, value)| (address.clone(), value)),
        )
    }

    /// Describe every cell, zeros included
    pub fn to_spec(&self) -> TensorSpec {
        TensorSpec::from_normalized(self.tensor_type.clone(), self.cells())
    }

    /// The tensor type
    pub fn tensor_type(&self) -> &TensorType {
        &self.tensor_type
    }

    /// Extents in dimension order
    pub fn shape(&self) -> Shape {
        self.tensor_type.shape()
    }

    /// Number of cells
    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    /// Value at a multi-index, `None` if out of range
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        self.cells.get(index).copied()
    }

    /// Value at an address, resolving numeric string labels
    pub fn get_address(&self, address: &Address) -> Option<f64> {
        let index = address.to_indices()?;
        self.get(&index)
    }

    /// Row-major offset of a multi-index
    pub fn offset(&self, index: &[usize]) -> Option<usize> {
        self.cells.offset(index)
    }

    /// Cell values in row-major order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().copied()
    }

    /// Every cell with its index address, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Address, f64)> + '_ {
        self.values().enumerate().map(move |(offset, value)| {
            let index = self.cells.unravel(offset).unwrap_or_default();
            (Address::from_indices(&index), value)
        })
    }

    /// Copy of this tensor with `edit` applied to a fresh copy of the storage.
    ///
    /// The storage shape cannot change, so the result has this tensor's type
    /// and volume.
    ///
    /// # Examples
    ///
    /// ```
    /// use celltensor_core::{DenseTensor, TensorType};
    ///
    /// let ty = TensorType::dense(&[("x", 3usize)]).unwrap();
    /// let source = DenseTensor::zeros(ty).unwrap();
    /// let result = source.rebuild_with(|cells| {
    ///     if let Some(cell) = cells.get_mut(&[1]) {
    ///         *cell = 4.0;
    ///     }
    /// });
    /// assert_eq!(result.get(&[1]), Some(4.0));
    /// assert_eq!(source.get(&[1]), Some(0.0));
    /// ```
    pub fn rebuild_with<F>(&self, edit: F) -> Self
    where
        F: FnOnce(&mut DenseND<f64>),
    {
        let mut cells = self.cells.clone();
        edit(&mut cells);
        Self {
            tensor_type: self.tensor_type.clone(),
            cells,
        }
    }

    fn checked_indices(&self, address: &Address) -> CoreResult<Vec<usize>> {
        let normalized = self.tensor_type.normalize(address)?;
        Ok(normalized
            .labels()
            .iter()
            .filter_map(|label| match label {
                Label::Index(index) => Some(*index),
                Label::Name(_) => None,
            })
            .collect())
    }
}

fn check_dense(tensor_type: &TensorType) -> CoreResult<()> {
    if !tensor_type.is_dense() {
        return Err(CoreError::WrongKind {
            expected: "dense",
            tensor_type: tensor_type.to_string(),
        });
    }
    Ok(())
}
