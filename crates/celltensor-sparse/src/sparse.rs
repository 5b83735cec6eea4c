//! Sparse (mapped) tensors
//!
//! A [`SparseTensor`] stores `(address, value)` pairs for an all-mapped
//! tensor type. Only addresses inserted at construction exist as cells;
//! every other address reads as 0.0.
//!
//! # Examples
//!
//! ```
//! use celltensor_core::{Address, TensorType};
//! use celltensor_sparse::SparseTensor;
//!
//! let ty = TensorType::sparse(&["x", "y"]).unwrap();
//! let tensor = SparseTensor::from_cells(
//!     ty,
//!     vec![
//!         (Address::new(["8", "9"]), 11.0),
//!         (Address::new(["9", "9"]), 11.0),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(tensor.nnz(), 2);
//! assert_eq!(tensor.get(&Address::new(["8", "9"])), 11.0);
//! assert_eq!(tensor.get(&Address::new(["7", "9"])), 0.0);
//! ```

use crate::error::SparseResult;
use celltensor_core::{Address, CoreError, Label, TensorSpec, TensorType};
use std::borrow::Cow;
use std::collections::HashMap;

/// Sparse tensor over an all-mapped type.
///
/// Keys always hold string labels, in type order. The key set is fixed at
/// construction: operations produce new tensors through
/// [`rebuild_with`](SparseTensor::rebuild_with), which can change values but
/// never add or remove keys.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseTensor {
    tensor_type: TensorType,
    cells: HashMap<Address, f64>,
}

impl SparseTensor {
    /// Tensor with no cells
    ///
    /// # Errors
    ///
    /// Returns an error if the type has an indexed dimension.
    pub fn empty(tensor_type: TensorType) -> SparseResult<Self> {
        check_sparse(&tensor_type)?;
        Ok(Self {
            tensor_type,
            cells: HashMap::new(),
        })
    }

    /// Tensor holding exactly the given cells
    ///
    /// Integer labels are stored as their decimal string. A repeated address
    /// keeps the last value.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is not sparse or an address has the
    /// wrong number of labels.
    pub fn from_cells<I>(tensor_type: TensorType, cells: I) -> SparseResult<Self>
    where
        I: IntoIterator<Item = (Address, f64)>,
    {
        let mut tensor = Self::empty(tensor_type)?;
        for (address, value) in cells {
            let key = tensor.tensor_type.normalize(&address)?;
            tensor.cells.insert(key, value);
        }
        Ok(tensor)
    }

    /// Build from a tensor description
    pub fn from_spec(spec: &TensorSpec) -> SparseResult<Self> {
        Self::from_cells(
            spec.tensor_type().clone(),
            spec.cells().map(|(address, value)| (address.clone(), value)),
        )
    }

    /// Describe every stored cell
    pub fn to_spec(&self) -> TensorSpec {
        let mut spec = TensorSpec::new(self.tensor_type.clone());
        for (address, value) in &self.cells {
            let cell = self
                .tensor_type
                .dimension_names()
                .zip(address.labels().iter().cloned());
            let added = spec.try_add(cell, *value);
            debug_assert!(added.is_ok(), "stored key {} invalid", address);
        }
        spec
    }

    /// The tensor type
    pub fn tensor_type(&self) -> &TensorType {
        &self.tensor_type
    }

    /// Number of stored cells
    pub fn nnz(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cells are stored
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `address` is a stored cell
    pub fn contains(&self, address: &Address) -> bool {
        self.cells.contains_key(&*key_of(address))
    }

    /// Stored value at `address`, `None` if absent
    pub fn get_cell(&self, address: &Address) -> Option<f64> {
        self.cells.get(&*key_of(address)).copied()
    }

    /// Value at `address`, 0.0 if absent
    pub fn get(&self, address: &Address) -> f64 {
        self.get_cell(address).unwrap_or(0.0)
    }

    /// Stored cells in unspecified order
    pub fn cells(&self) -> impl Iterator<Item = (&Address, f64)> + '_ {
        self.cells.iter().map(|(address, value)| (address, *value))
    }

    /// Copy of this tensor with `edit` applied to a fresh copy of the cells.
    ///
    /// `edit` sees only the existing cells, so the result has exactly this
    /// tensor's key set.
    ///
    /// # Examples
    ///
    /// ```
    /// use celltensor_core::{Address, TensorType};
    /// use celltensor_sparse::SparseTensor;
    ///
    /// let ty = TensorType::sparse(&["x"]).unwrap();
    /// let source = SparseTensor::from_cells(ty, vec![(Address::new(["a"]), 1.0)]).unwrap();
    ///
    /// let result = source.rebuild_with(|cells| {
    ///     if let Some(value) = cells.get_mut(&Address::new(["a"])) {
    ///         *value += 1.0;
    ///     }
    ///     assert!(cells.get_mut(&Address::new(["b"])).is_none());
    /// });
    ///
    /// assert_eq!(result.get(&Address::new(["a"])), 2.0);
    /// assert_eq!(source.get(&Address::new(["a"])), 1.0);
    /// assert_eq!(result.nnz(), 1);
    /// ```
    pub fn rebuild_with<F>(&self, edit: F) -> Self
    where
        F: FnOnce(&mut ExistingCells<'_>),
    {
        let mut cells = self.cells.clone();
        edit(&mut ExistingCells { cells: &mut cells });
        Self {
            tensor_type: self.tensor_type.clone(),
            cells,
        }
    }
}

/// Write access to the existing cells of a sparse tensor being rebuilt.
///
/// Values can change; keys cannot be added or removed.
pub struct ExistingCells<'a> {
    cells: &'a mut HashMap<Address, f64>,
}

impl ExistingCells<'_> {
    /// Mutable value of an existing cell, `None` if the key is absent
    pub fn get_mut(&mut self, address: &Address) -> Option<&mut f64> {
        self.cells.get_mut(&*key_of(address))
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if there are no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn key_of(address: &Address) -> Cow<'_, Address> {
    if address.labels().iter().any(Label::is_index) {
        Cow::Owned(address.to_names())
    } else {
        Cow::Borrowed(address)
    }
}

fn check_sparse(tensor_type: &TensorType) -> Result<(), CoreError> {
    if !tensor_type.is_sparse() {
        return Err(CoreError::WrongKind {
            expected: "sparse",
            tensor_type: tensor_type.to_string(),
        });
    }
    Ok(())
}
