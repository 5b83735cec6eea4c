//! Declarative tensor descriptions.
//!
//! A [`TensorSpec`] is a tensor type plus an explicit list of cells. It is
//! how tensors are described in tests and how they are rendered back for
//! comparison: two tensors with equal specs hold the same content, whatever
//! order their cells were produced in.
//!
//! # Examples
//!
//! ```
//! use celltensor_core::{TensorSpec, TensorType};
//!
//! let spec = TensorSpec::new(TensorType::sparse(&["x", "y"]).unwrap())
//!     .add([("x", "8"), ("y", "9")], 11.0)
//!     .add([("y", "9"), ("x", "9")], 11.0);
//!
//! assert_eq!(spec.len(), 2);
//! assert_eq!(
//!     spec.to_string(),
//!     "tensor(x{},y{}):{{x:8,y:9}:11,{x:9,y:9}:11}"
//! );
//! ```

use crate::address::{Address, Label};
use crate::error::{CoreError, CoreResult};
use crate::types::{DimensionKind, TensorType};
use std::collections::BTreeMap;
use std::fmt;

/// A tensor type and its listed cells, keyed by normalized address.
#[derive(Clone, Debug, PartialEq)]
pub struct TensorSpec {
    tensor_type: TensorType,
    cells: BTreeMap<Address, f64>,
}

impl TensorSpec {
    /// Empty description of the given type
    pub fn new(tensor_type: TensorType) -> Self {
        Self {
            tensor_type,
            cells: BTreeMap::new(),
        }
    }

    pub(crate) fn from_normalized<I>(tensor_type: TensorType, cells: I) -> Self
    where
        I: IntoIterator<Item = (Address, f64)>,
    {
        Self {
            tensor_type,
            cells: cells.into_iter().collect(),
        }
    }

    /// Add a cell given as `(dimension name, label)` pairs in any order.
    ///
    /// Labels are normalized to the dimension kind: indices on mapped
    /// dimensions become their decimal string, numeric strings on indexed
    /// dimensions become indices. Adding the same address twice keeps the
    /// last value. Index ranges are checked when a tensor is built from the
    /// description, not here.
    ///
    /// # Errors
    ///
    /// Unknown or repeated dimension names, a missing dimension, or a
    /// non-numeric label on an indexed dimension.
    pub fn try_add<I, N, L>(&mut self, cell: I, value: f64) -> CoreResult<()>
    where
        I: IntoIterator<Item = (N, L)>,
        N: AsRef<str>,
        L: Into<Label>,
    {
        let dimensions = self.tensor_type.dimensions();
        let mut labels: Vec<Option<Label>> = vec![None; dimensions.len()];

        for (name, label) in cell {
            let name = name.as_ref();
            let pos = self
                .tensor_type
                .index_of(name)
                .ok_or_else(|| CoreError::UnknownDimension {
                    name: name.to_string(),
                    tensor_type: self.tensor_type.to_string(),
                })?;
            if labels[pos].is_some() {
                return Err(CoreError::DuplicateDimension {
                    name: name.to_string(),
                });
            }
            let label = label.into();
            labels[pos] = Some(match dimensions[pos].kind {
                DimensionKind::Mapped => Label::Name(label.as_name().into_owned()),
                DimensionKind::Indexed(_) => {
                    Label::Index(label.as_index().ok_or_else(|| CoreError::InvalidIndex {
                        dimension: name.to_string(),
                        label: label.to_string(),
                    })?)
                }
            });
        }

        let address = labels
            .into_iter()
            .zip(dimensions)
            .map(|(label, dim)| {
                label.ok_or_else(|| CoreError::MissingDimension {
                    name: dim.name.clone(),
                })
            })
            .collect::<CoreResult<Address>>()?;

        self.cells.insert(address, value);
        Ok(())
    }

    /// Builder form of [`try_add`](Self::try_add).
    ///
    /// # Panics
    ///
    /// Panics if the cell is malformed for this description's type.
    pub fn add<I, N, L>(mut self, cell: I, value: f64) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        N: AsRef<str>,
        L: Into<Label>,
    {
        if let Err(e) = self.try_add(cell, value) {
            panic!("invalid cell for {}: {}", self.tensor_type, e);
        }
        self
    }

    /// The described type
    pub fn tensor_type(&self) -> &TensorType {
        &self.tensor_type
    }

    /// Listed cells in address order
    pub fn cells(&self) -> impl Iterator<Item = (&Address, f64)> + '_ {
        self.cells.iter().map(|(address, value)| (address, *value))
    }

    /// Value listed for an address
    pub fn get(&self, address: &Address) -> Option<f64> {
        self.cells.get(address).copied()
    }

    /// Number of listed cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cells are listed
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for TensorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{{", self.tensor_type)?;
        for (i, (address, value)) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str("{")?;
            for (j, (name, label)) in self
                .tensor_type
                .dimension_names()
                .zip(address.labels())
                .enumerate()
            {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}:{}", name, label)?;
            }
            write!(f, "}}:{}", value)?;
        }
        f.write_str("}")
    }
}
