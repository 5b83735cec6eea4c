//! Property-based tests for sparse tensors and update sets
//!
//! These tests use proptest to verify key normalization, the fixed key set
//! of rebuilt tensors, and extraction of update sets.

use celltensor_core::{Address, DenseTensor, TensorType};
use celltensor_sparse::{CellValues, SparseTensor};
use proptest::prelude::*;
use std::collections::HashMap;

// ============================================================================
// Test Utilities
// ============================================================================

/// Strategy for generating sparse cells over `tensor(x{},y{})`
fn cells_strategy() -> impl Strategy<Value = Vec<((String, String), f64)>> {
    prop::collection::vec((("[a-z0-9]{1,3}", "[a-z0-9]{1,3}"), -100.0f64..100.0), 0..32)
}

fn xy() -> TensorType {
    TensorType::sparse(&["x", "y"]).unwrap()
}

fn build(cells: &[((String, String), f64)]) -> SparseTensor {
    SparseTensor::from_cells(
        xy(),
        cells
            .iter()
            .map(|((x, y), v)| (Address::new([x.as_str(), y.as_str()]), *v)),
    )
    .unwrap()
}

// ============================================================================
// Sparse Tensor Properties
// ============================================================================

proptest! {
    /// Property: construction behaves like map insertion (last value wins)
    #[test]
    fn prop_from_cells_matches_map(cells in cells_strategy()) {
        let tensor = build(&cells);
        let expected: HashMap<Address, f64> = cells
            .iter()
            .map(|((x, y), v)| (Address::new([x.as_str(), y.as_str()]), *v))
            .collect();

        prop_assert_eq!(tensor.nnz(), expected.len());
        for (address, value) in &expected {
            prop_assert_eq!(tensor.get_cell(address), Some(*value));
        }
    }

    /// Property: a rebuild that touches every cell keeps the key set
    #[test]
    fn prop_rebuild_preserves_keys(cells in cells_strategy(), other in "[a-z]{4}") {
        let source = build(&cells);
        let keys: Vec<Address> = source.cells().map(|(a, _)| a.clone()).collect();
        let other = Address::new([other.as_str(), other.as_str()]);

        let mut other_found = false;
        let result = source.rebuild_with(|existing| {
            for key in &keys {
                if let Some(value) = existing.get_mut(key) {
                    *value *= 2.0;
                }
            }
            other_found = existing.get_mut(&other).is_some();
        });

        prop_assert_eq!(other_found, source.contains(&other));
        prop_assert_eq!(result.nnz(), source.nnz());
        for key in &keys {
            prop_assert_eq!(result.get(key), source.get(key) * 2.0);
        }
    }

    /// Property: update sets from sparse tensors carry every stored cell
    #[test]
    fn prop_cell_values_from_sparse(cells in cells_strategy()) {
        let tensor = build(&cells);
        let update = CellValues::from_sparse(&tensor);

        prop_assert_eq!(update.len(), tensor.nnz());
        for (address, value) in tensor.cells() {
            prop_assert_eq!(update.get(address), Some(value));
        }
    }

    /// Property: update sets from dense tensors carry exactly the nonzero cells
    #[test]
    fn prop_cell_values_from_dense(values in prop::collection::vec(prop_oneof![Just(0.0), -5.0f64..5.0], 12)) {
        let ty = TensorType::dense(&[("x", 3usize), ("y", 4usize)]).unwrap();
        let tensor = DenseTensor::from_vec(ty, values.clone()).unwrap();
        let update = CellValues::from_dense(&tensor);

        prop_assert_eq!(update.len(), values.iter().filter(|v| **v != 0.0).count());
        for (address, value) in update.iter() {
            prop_assert_eq!(tensor.get_address(address), Some(value));
        }
    }
}
