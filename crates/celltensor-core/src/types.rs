//! Tensor type definitions.
//!
//! A [`TensorType`] is an ordered list of uniquely named [`Dimension`]s.
//! Each dimension is either [`DimensionKind::Mapped`] (an unbounded set of
//! string labels, stored sparsely) or [`DimensionKind::Indexed`] (a fixed
//! extent, stored densely).
//!
//! # Examples
//!
//! ```
//! use celltensor_core::{Dimension, TensorType};
//!
//! let ty = TensorType::new(vec![
//!     Dimension::indexed("x", 10),
//!     Dimension::indexed("y", 10),
//! ]).unwrap();
//!
//! assert!(ty.is_dense());
//! assert_eq!(ty.volume(), 100);
//! assert_eq!(ty.to_string(), "tensor(x[10],y[10])");
//! ```

use crate::address::{Address, Label};
use crate::error::{CoreError, CoreResult};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;

/// Type alias for a dimension position inside a tensor type.
pub type Axis = usize;

/// Extents of the indexed dimensions of a type, inline up to 6 dimensions.
pub type Shape = SmallVec<[usize; 6]>;

/// How a dimension is addressed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DimensionKind {
    /// Unbounded key space, string labels
    Mapped,
    /// Fixed extent, integer indices in `[0, extent)`
    Indexed(usize),
}

/// A named dimension of a tensor type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    /// Dimension name, unique within its type
    pub name: String,
    /// Mapped or indexed
    pub kind: DimensionKind,
}

impl Dimension {
    /// Create a mapped dimension.
    ///
    /// ```
    /// use celltensor_core::{Dimension, DimensionKind};
    ///
    /// let dim = Dimension::mapped("user");
    /// assert_eq!(dim.kind, DimensionKind::Mapped);
    /// ```
    pub fn mapped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: DimensionKind::Mapped,
        }
    }

    /// Create an indexed dimension with the given extent.
    pub fn indexed(name: impl Into<String>, extent: usize) -> Self {
        Self {
            name: name.into(),
            kind: DimensionKind::Indexed(extent),
        }
    }

    /// Whether this dimension is mapped
    pub fn is_mapped(&self) -> bool {
        matches!(self.kind, DimensionKind::Mapped)
    }

    /// Extent of an indexed dimension, `None` for mapped ones
    pub fn extent(&self) -> Option<usize> {
        match self.kind {
            DimensionKind::Mapped => None,
            DimensionKind::Indexed(extent) => Some(extent),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DimensionKind::Mapped => write!(f, "{}{{}}", self.name),
            DimensionKind::Indexed(extent) => write!(f, "{}[{}]", self.name, extent),
        }
    }
}

/// Ordered set of named dimensions.
///
/// Immutable once constructed. Names are unique and non-empty; indexed
/// extents are positive.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TensorType {
    dimensions: Vec<Dimension>,
}

impl TensorType {
    /// Create a tensor type from dimensions in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is empty or repeated, an indexed
    /// dimension has extent 0, or the volume does not fit in `usize`.
    pub fn new(dimensions: Vec<Dimension>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(dimensions.len());
        for dim in &dimensions {
            if dim.name.is_empty() {
                return Err(CoreError::EmptyDimensionName);
            }
            if !seen.insert(dim.name.as_str()) {
                return Err(CoreError::DuplicateDimension {
                    name: dim.name.clone(),
                });
            }
            if dim.kind == DimensionKind::Indexed(0) {
                return Err(CoreError::ZeroExtent {
                    name: dim.name.clone(),
                });
            }
        }
        let tensor_type = Self { dimensions };
        let volume = tensor_type
            .dimensions
            .iter()
            .filter_map(Dimension::extent)
            .try_fold(1usize, usize::checked_mul);
        if volume.is_none() {
            return Err(CoreError::VolumeOverflow {
                tensor_type: tensor_type.to_string(),
            });
        }
        Ok(tensor_type)
    }

    /// Convenience constructor for an all-mapped type
    ///
    /// ```
    /// use celltensor_core::TensorType;
    ///
    /// let ty = TensorType::sparse(&["x", "y"]).unwrap();
    /// assert_eq!(ty.to_string(), "tensor(x{},y{})");
    /// ```
    pub fn sparse(names: &[&str]) -> CoreResult<Self> {
        Self::new(names.iter().map(|name| Dimension::mapped(*name)).collect())
    }

    /// Convenience constructor for an all-indexed type
    pub fn dense(dims: &[(&str, usize)]) -> CoreResult<Self> {
        Self::new(
            dims.iter()
                .map(|(name, extent)| Dimension::indexed(*name, *extent))
                .collect(),
        )
    }

    /// The rank-0 type (a single scalar cell)
    pub fn scalar() -> Self {
        Self::default()
    }

    /// Dimensions in order
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.dimensions.len()
    }

    /// Dimension names in order
    pub fn dimension_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.dimensions.iter().map(|dim| dim.name.as_str())
    }

    /// Position of the dimension called `name`
    pub fn index_of(&self, name: &str) -> Option<Axis> {
        self.dimensions.iter().position(|dim| dim.name == name)
    }

    /// All dimensions are mapped (true for rank 0)
    pub fn is_sparse(&self) -> bool {
        self.dimensions.iter().all(Dimension::is_mapped)
    }

    /// All dimensions are indexed (true for rank 0)
    pub fn is_dense(&self) -> bool {
        self.dimensions.iter().all(|dim| !dim.is_mapped())
    }

    /// Some dimensions are mapped and some indexed
    pub fn is_mixed(&self) -> bool {
        !self.is_sparse() && !self.is_dense()
    }

    /// Extents of the indexed dimensions, in order
    pub fn shape(&self) -> Shape {
        self.dimensions.iter().filter_map(Dimension::extent).collect()
    }

    /// Number of cells of a dense tensor of this type (1 for rank 0)
    ///
    /// Never overflows: construction rejects types whose volume does not fit.
    pub fn volume(&self) -> usize {
        self.shape().iter().product()
    }

    /// Check that `address` is well formed for this type and normalize its
    /// labels: mapped dimensions get string labels, indexed dimensions get
    /// in-range integer indices.
    ///
    /// # Errors
    ///
    /// Wrong label count, a non-numeric label on an indexed dimension, or an
    /// index outside the dimension's extent.
    pub fn normalize(&self, address: &Address) -> CoreResult<Address> {
        if address.rank() != self.rank() {
            return Err(CoreError::RankMismatch {
                expected: self.rank(),
                actual: address.rank(),
            });
        }
        self.dimensions
            .iter()
            .zip(address.labels())
            .map(|(dim, label)| match dim.kind {
                DimensionKind::Mapped => Ok(Label::Name(label.as_name().into_owned())),
                DimensionKind::Indexed(extent) => {
                    let index = label.as_index().ok_or_else(|| CoreError::InvalidIndex {
                        dimension: dim.name.clone(),
                        label: label.to_string(),
                    })?;
                    if index >= extent {
                        return Err(CoreError::IndexOutOfRange {
                            dimension: dim.name.clone(),
                            index,
                            extent,
                        });
                    }
                    Ok(Label::Index(index))
                }
            })
            .collect()
    }
}

impl fmt::Display for TensorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("tensor(")?;
        for (i, dim) in self.dimensions.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", dim)?;
        }
        f.write_str(")")
    }
}
