//! Cell update sets
//!
//! [`CellValues`] is the sparse set of `(address, value)` pairs fed to the
//! modify engine. Its dimensions are named, and matched to a source tensor
//! by name rather than by position. It can be extracted from a sparse
//! tensor (every stored cell) or a dense tensor (every nonzero cell).

use crate::error::CellValuesError;
use crate::sparse::SparseTensor;
use celltensor_core::{Address, DenseTensor, Label};
use std::collections::HashMap;

/// Named-dimension map from addresses to update values.
///
/// Keys are stored with string labels, so `Index(8)` and `Name("8")` name
/// the same cell. Inserting an address twice keeps the last value.
///
/// # Examples
///
/// ```
/// use celltensor_core::Address;
/// use celltensor_sparse::CellValues;
///
/// let mut update = CellValues::new(["x", "y"]).unwrap();
/// update.insert(Address::new(["8", "9"]), 1.0).unwrap();
/// update.insert(Address::new(["8", "9"]), 2.0).unwrap();
///
/// assert_eq!(update.len(), 1);
/// assert_eq!(update.get(&Address::new(["8", "9"])), Some(2.0));
///
/// update.insert(Address::from_indices(&[8, 9]), 3.0).unwrap();
/// assert_eq!(update.len(), 1);
/// assert_eq!(update.get(&Address::new(["8", "9"])), Some(3.0));
/// assert!(update.insert(Address::new(["8"]), 1.0).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellValues {
    dimensions: Vec<String>,
    cells: HashMap<Address, f64>,
}

impl CellValues {
    /// Empty update set over the given dimension names
    ///
    /// # Errors
    ///
    /// Returns an error for an empty or repeated name.
    pub fn new<I, S>(dimensions: I) -> Result<Self, CellValuesError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in dimensions {
            let name = name.into();
            if name.is_empty() {
                return Err(CellValuesError::EmptyDimensionName);
            }
            if names.contains(&name) {
                return Err(CellValuesError::DuplicateDimension { name });
            }
            names.push(name);
        }
        Ok(Self {
            dimensions: names,
            cells: HashMap::new(),
        })
    }

    /// Every stored cell of a sparse tensor
    pub fn from_sparse(tensor: &SparseTensor) -> Self {
        Self {
            dimensions: owned_names(tensor.tensor_type().dimension_names()),
            cells: tensor
                .cells()
                .map(|(address, value)| (address.clone(), value))
                .collect(),
        }
    }

    /// Every nonzero cell of a dense tensor, indices rendered as labels
    pub fn from_dense(tensor: &DenseTensor) -> Self {
        Self {
            dimensions: owned_names(tensor.tensor_type().dimension_names()),
            cells: tensor
                .cells()
                .filter(|(_, value)| *value != 0.0)
                .map(|(address, value)| (address.to_names(), value))
                .collect(),
        }
    }

    /// Set the value for `address`, returning the previous one
    ///
    /// # Errors
    ///
    /// Returns [`CellValuesError::RankMismatch`] if the address does not
    /// have one label per dimension.
    pub fn insert(&mut self, address: Address, value: f64) -> Result<Option<f64>, CellValuesError> {
        if address.rank() != self.dimensions.len() {
            return Err(CellValuesError::RankMismatch {
                expected: self.dimensions.len(),
                actual: address.rank(),
            });
        }
        Ok(self.cells.insert(canonical(address), value))
    }

    /// Dimension names in address order
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if there are no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value for an address, matching index labels to their decimal names
    pub fn get(&self, address: &Address) -> Option<f64> {
        self.cells.get(&canonical(address.clone())).copied()
    }

    /// Cells in unspecified order, every label a string
    pub fn iter(&self) -> impl Iterator<Item = (&Address, f64)> + '_ {
        self.cells.iter().map(|(address, value)| (address, *value))
    }
}

impl From<&SparseTensor> for CellValues {
    fn from(tensor: &SparseTensor) -> Self {
        Self::from_sparse(tensor)
    }
}

impl From<&DenseTensor> for CellValues {
    fn from(tensor: &DenseTensor) -> Self {
        Self::from_dense(tensor)
    }
}

fn canonical(address: Address) -> Address {
    if address.labels().iter().any(Label::is_index) {
        address.to_names()
    } else {
        address
    }
}

fn owned_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    names.map(str::to_string).collect()
}
