//! The cell-modify engine
//!
//! `modify(source, update, f)` produces a tensor of the source's type and
//! representation where every cell addressed by the update set holds
//! `f(old, new)`, and every other cell is unchanged.
//!
//! The update set's dimensions are matched to the source's by name, so its
//! dimension order does not matter. Each update address is then resolved
//! against the source:
//!
//! - **Sparse sources**: labels are rendered as strings; the update applies
//!   only if that key is already stored. Keys are never inserted.
//! - **Dense sources**: labels must be non-negative decimal integers within
//!   each extent; the update applies at the row-major offset.
//!
//! Updates that do not resolve are discarded without error and counted in
//! [`ModifyStats`].
//!
//! # Examples
//!
//! ```
//! use celltensor_core::{Address, TensorSpec, TensorType};
//! use celltensor_exec::{modify, Tensor};
//! use celltensor_sparse::CellValues;
//!
//! let ty = TensorType::dense(&[("x", 10usize), ("y", 10usize)]).unwrap();
//! let source = Tensor::from_spec(&TensorSpec::new(ty).add([("x", 8usize), ("y", 9usize)], 11.0))
//!     .unwrap();
//!
//! let mut update = CellValues::new(["x", "y"]).unwrap();
//! update.insert(Address::new(["8", "9"]), 2.0).unwrap();
//! update.insert(Address::new(["10", "9"]), 3.0).unwrap(); // out of range
//!
//! let result = modify(&source, &update, |old, new| old + new).unwrap();
//! let dense = result.as_dense().unwrap();
//! assert_eq!(dense.get(&[8, 9]), Some(13.0));
//! assert_eq!(dense.volume(), 100);
//! ```

use crate::error::{ModifyError, ModifyResult};
use crate::options::ModifyOptions;
use crate::tensor::Tensor;
use crate::tracing_support::{record_discard, record_modify};
use celltensor_core::{Address, DenseTensor, DimensionKind, Label, TensorType};
use celltensor_sparse::{CellValues, SparseTensor};
use smallvec::SmallVec;
use std::fmt;

/// Why an update cell was not applied
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Discard {
    /// Non-numeric label on an indexed dimension
    Unresolvable,
    /// Index at or beyond a dimension's extent
    OutOfRange,
    /// Key not stored in the sparse source
    UnknownKey,
}

impl fmt::Display for Discard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Discard::Unresolvable => "unresolvable",
            Discard::OutOfRange => "out_of_range",
            Discard::UnknownKey => "unknown_key",
        })
    }
}

/// Target of a resolved update address
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// Sparse key, string labels in source order
    Key(Address),
    /// Row-major offset into dense storage
    Offset(usize),
}

/// Counts of applied and discarded update cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifyStats {
    /// Cells where `f` was applied
    pub applied: usize,
    /// Non-numeric labels on indexed dimensions
    pub unresolvable: usize,
    /// Indices beyond an extent
    pub out_of_range: usize,
    /// Keys absent from a sparse source
    pub unknown_key: usize,
}

impl ModifyStats {
    /// Number of update cells not applied
    pub fn discarded(&self) -> usize {
        self.unresolvable + self.out_of_range + self.unknown_key
    }

    /// Number of update cells seen
    pub fn total(&self) -> usize {
        self.applied + self.discarded()
    }

    fn record(&mut self, address: &Address, reason: Discard) {
        record_discard(address, reason);
        match reason {
            Discard::Unresolvable => self.unresolvable += 1,
            Discard::OutOfRange => self.out_of_range += 1,
            Discard::UnknownKey => self.unknown_key += 1,
        }
    }
}

/// Positions of the source's dimensions within update addresses.
///
/// `positions[i]` is the update position holding the label for source
/// dimension `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DimensionMap {
    positions: SmallVec<[usize; 4]>,
}

impl DimensionMap {
    /// Match update dimensions to source dimensions by name
    ///
    /// # Errors
    ///
    /// [`ModifyError::DimensionMismatch`] unless the update set has exactly
    /// the source's dimension names.
    pub fn new(source: &TensorType, update: &CellValues) -> ModifyResult<Self> {
        let mismatch = || ModifyError::DimensionMismatch {
            expected: source.dimension_names().map(str::to_string).collect(),
            actual: update.dimensions().to_vec(),
        };
        if update.rank() != source.rank() {
            return Err(mismatch());
        }
        let positions = source
            .dimension_names()
            .map(|name| update.dimensions().iter().position(|d| d == name))
            .collect::<Option<SmallVec<[usize; 4]>>>()
            .ok_or_else(mismatch)?;
        Ok(Self { positions })
    }

    /// Update position for each source dimension
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    fn labels<'a>(&'a self, address: &'a Address) -> impl Iterator<Item = &'a Label> + 'a {
        self.positions.iter().filter_map(move |&pos| address.get(pos))
    }
}

/// Resolve an update address against a source type.
///
/// Mapped dimensions take the label verbatim as a string; indexed dimensions
/// require a decimal index within the extent. Every label is checked for
/// being numeric before any range is checked.
///
/// # Examples
///
/// ```
/// use celltensor_core::{Address, TensorType};
/// use celltensor_exec::{resolve, Discard, DimensionMap, Resolved};
/// use celltensor_sparse::CellValues;
///
/// let ty = TensorType::dense(&[("x", 10usize), ("y", 10usize)]).unwrap();
/// let update = CellValues::new(["y", "x"]).unwrap();
/// let map = DimensionMap::new(&ty, &update).unwrap();
///
/// assert_eq!(resolve(&ty, &map, &Address::new(["9", "8"])), Ok(Resolved::Offset(89)));
/// assert_eq!(resolve(&ty, &map, &Address::new(["9", "10"])), Err(Discard::OutOfRange));
/// assert_eq!(resolve(&ty, &map, &Address::new(["9", "x"])), Err(Discard::Unresolvable));
/// ```
pub fn resolve(
    source: &TensorType,
    map: &DimensionMap,
    address: &Address,
) -> Result<Resolved, Discard> {
    if address.rank() != map.positions.len() {
        return Err(Discard::Unresolvable);
    }
    if source.is_dense() {
        resolve_offset(source, map, address).map(Resolved::Offset)
    } else {
        Ok(Resolved::Key(resolve_key(map, address)))
    }
}

fn resolve_key(map: &DimensionMap, address: &Address) -> Address {
    map.labels(address)
        .map(|label| Label::Name(label.as_name().into_owned()))
        .collect()
}

fn resolve_offset(
    source: &TensorType,
    map: &DimensionMap,
    address: &Address,
) -> Result<usize, Discard> {
    let indices = map
        .labels(address)
        .map(Label::as_index)
        .collect::<Option<SmallVec<[usize; 4]>>>()
        .ok_or(Discard::Unresolvable)?;

    let mut offset = 0;
    for (&index, dim) in indices.iter().zip(source.dimensions()) {
        let extent = match dim.kind {
            DimensionKind::Indexed(extent) => extent,
            DimensionKind::Mapped => return Err(Discard::Unresolvable),
        };
        if index >= extent {
            return Err(Discard::OutOfRange);
        }
        offset = offset * extent + index;
    }
    Ok(offset)
}

fn check_address(update: &CellValues, address: &Address) -> ModifyResult<()> {
    if address.rank() != update.rank() {
        return Err(ModifyError::MalformedAddress {
            expected: update.rank(),
            actual: address.rank(),
        });
    }
    Ok(())
}

/// Modify a sparse tensor
///
/// Only keys already stored in `source` can change; the result has exactly
/// the source's key set.
///
/// # Errors
///
/// [`ModifyError::DimensionMismatch`] or [`ModifyError::MalformedAddress`].
pub fn modify_sparse<F>(
    source: &SparseTensor,
    update: &CellValues,
    f: F,
) -> ModifyResult<(SparseTensor, ModifyStats)>
where
    F: Fn(f64, f64) -> f64,
{
    let map = DimensionMap::new(source.tensor_type(), update)?;
    for (address, _) in update.iter() {
        check_address(update, address)?;
    }

    let mut stats = ModifyStats::default();
    let result = source.rebuild_with(|cells| {
        for (address, new) in update.iter() {
            let key = resolve_key(&map, address);
            match cells.get_mut(&key) {
                Some(cell) => {
                    *cell = f(*cell, new);
                    stats.applied += 1;
                }
                None => stats.record(address, Discard::UnknownKey),
            }
        }
    });

    record_modify("sparse", &stats);
    Ok((result, stats))
}

/// Modify a dense tensor
///
/// Updates outside the shape are discarded; the result has the source's
/// type and volume.
///
/// # Errors
///
/// [`ModifyError::DimensionMismatch`] or [`ModifyError::MalformedAddress`].
pub fn modify_dense<F>(
    source: &DenseTensor,
    update: &CellValues,
    f: F,
) -> ModifyResult<(DenseTensor, ModifyStats)>
where
    F: Fn(f64, f64) -> f64,
{
    let map = DimensionMap::new(source.tensor_type(), update)?;
    for (address, _) in update.iter() {
        check_address(update, address)?;
    }

    let mut stats = ModifyStats::default();
    let result = source.rebuild_with(|cells| {
        for (address, new) in update.iter() {
            let offset = match resolve_offset(source.tensor_type(), &map, address) {
                Ok(offset) => offset,
                Err(reason) => {
                    stats.record(address, reason);
                    continue;
                }
            };
            match cells.get_flat_mut(offset) {
                Some(cell) => {
                    *cell = f(*cell, new);
                    stats.applied += 1;
                }
                None => stats.record(address, Discard::OutOfRange),
            }
        }
    });

    record_modify("dense", &stats);
    Ok((result, stats))
}

/// Modify `source` with `update`, combining values with `f(old, new)`
///
/// Returns a new tensor of the same variant and type; `source` is never
/// changed. An empty update set returns a tensor equal to the source.
/// `f` runs at most once per cell: update keys are canonical, so no two of
/// them resolve to the same key or offset.
///
/// # Errors
///
/// Returns an error if the update set's dimension names differ from the
/// source's, or an update address has the wrong number of labels.
pub fn modify<F>(source: &Tensor, update: &CellValues, f: F) -> ModifyResult<Tensor>
where
    F: Fn(f64, f64) -> f64,
{
    modify_with_stats(source, update, f).map(|(tensor, _)| tensor)
}

/// [`modify`], also returning applied and discarded counts
pub fn modify_with_stats<F>(
    source: &Tensor,
    update: &CellValues,
    f: F,
) -> ModifyResult<(Tensor, ModifyStats)>
where
    F: Fn(f64, f64) -> f64,
{
    match source {
        Tensor::Sparse(tensor) => {
            let (result, stats) = modify_sparse(tensor, update, f)?;
            Ok((Tensor::Sparse(result), stats))
        }
        Tensor::Dense(tensor) => {
            let (result, stats) = modify_dense(tensor, update, f)?;
            Ok((Tensor::Dense(result), stats))
        }
    }
}

/// [`modify_with_stats`] with a named function and optional strict mode
///
/// # Errors
///
/// In strict mode, [`ModifyError::Rejected`] if any update cell was
/// discarded. Otherwise as [`modify`].
///
/// # Examples
///
/// ```
/// use celltensor_core::{Address, TensorSpec, TensorType};
/// use celltensor_exec::{modify_with_options, CellFunction, ModifyError, ModifyOptions, Tensor};
/// use celltensor_sparse::CellValues;
///
/// let ty = TensorType::sparse(&["x"]).unwrap();
/// let source = Tensor::from_spec(&TensorSpec::new(ty).add([("x", "a")], 1.0)).unwrap();
///
/// let mut update = CellValues::new(["x"]).unwrap();
/// update.insert(Address::new(["a"]), 2.0).unwrap();
/// update.insert(Address::new(["b"]), 2.0).unwrap();
///
/// let options = ModifyOptions::new().with_function(CellFunction::Add);
/// let (_, stats) = modify_with_options(&source, &update, &options).unwrap();
/// assert_eq!((stats.applied, stats.unknown_key), (1, 1));
///
/// let strict = options.with_strict(true);
/// assert!(matches!(
///     modify_with_options(&source, &update, &strict),
///     Err(ModifyError::Rejected { discarded: 1, total: 2 })
/// ));
/// ```
pub fn modify_with_options(
    source: &Tensor,
    update: &CellValues,
    options: &ModifyOptions,
) -> ModifyResult<(Tensor, ModifyStats)> {
    let (result, stats) = modify_with_stats(source, update, options.function.as_fn())?;
    if options.strict && stats.discarded() > 0 {
        return Err(ModifyError::Rejected {
            discarded: stats.discarded(),
            total: stats.total(),
        });
    }
    Ok((result, stats))
}
