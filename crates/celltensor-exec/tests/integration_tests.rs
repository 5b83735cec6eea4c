//! Integration tests for the modify engine
//!
//! These tests exercise modify end to end through tensor descriptions:
//! build a source, extract an update set, modify, and compare descriptions.

use celltensor_core::{Address, CoreError, Dimension, Label, TensorSpec, TensorType};
use celltensor_exec::{
    modify, modify_with_options, modify_with_stats, CellFunction, ModifyError, ModifyOptions,
    ModifyStats, Tensor,
};
use celltensor_sparse::{CellValues, SparseTensor};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

fn sparse_xy() -> TensorType {
    TensorType::sparse(&["x", "y"]).unwrap()
}

fn dense_xy() -> TensorType {
    TensorType::dense(&[("x", 10usize), ("y", 10usize)]).unwrap()
}

fn source(ty: TensorType) -> Tensor {
    let spec = TensorSpec::new(ty)
        .add([("x", "8"), ("y", "9")], 11.0)
        .add([("x", "9"), ("y", "9")], 11.0);
    Tensor::from_spec(&spec).unwrap()
}

fn sparse_update(cells: &[(&str, &str, f64)]) -> CellValues {
    let mut spec = TensorSpec::new(sparse_xy());
    for (x, y, value) in cells {
        spec = spec.add([("x", *x), ("y", *y)], *value);
    }
    CellValues::from_sparse(&SparseTensor::from_spec(&spec).unwrap())
}

#[test]
fn test_non_numeric_labels_ignored_by_dense() {
    let update = sparse_update(&[("8", "9", 2.0), ("eight", "9", 5.0), ("+9", "9", 5.0)]);
    let (result, stats) = modify_with_stats(&source(dense_xy()), &update, |_, new| new).unwrap();

    let expected = TensorSpec::new(dense_xy())
        .add([("x", 8usize), ("y", 9usize)], 2.0)
        .add([("x", 9usize), ("y", 9usize)], 11.0);
    assert_eq!(
        result.to_spec(),
        Tensor::from_spec(&expected).unwrap().to_spec()
    );
    assert_eq!(stats.applied, 1);
    assert_eq!(stats.unresolvable, 2);
}

#[test]
fn test_leading_zeros_unresolvable() {
    let update = sparse_update(&[("08", "009", 2.0)]);
    let (result, stats) = modify_with_stats(&source(dense_xy()), &update, |_, new| new).unwrap();
    assert_eq!(result.as_dense().unwrap().get(&[8, 9]), Some(11.0));
    assert_eq!(stats.unresolvable, 1);
    assert_eq!(stats.applied, 0);
}

#[test]
fn test_aliased_update_applies_once_per_cell() {
    let mut update = sparse_update(&[("8", "9", 2.0), ("08", "9", 5.0)]);
    update
        .insert(Address::new([Label::Index(9), Label::Index(9)]), 1.0)
        .unwrap();
    update.insert(Address::new(["9", "9"]), 4.0).unwrap();
    assert_eq!(update.len(), 3);

    for ty in [sparse_xy(), dense_xy()] {
        let calls = AtomicUsize::new(0);
        let (result, stats) = modify_with_stats(&source(ty.clone()), &update, |old, new| {
            calls.fetch_add(1, Ordering::SeqCst);
            old + new
        })
        .unwrap();

        let expected = TensorSpec::new(ty)
            .add([("x", "8"), ("y", "9")], 13.0)
            .add([("x", "9"), ("y", "9")], 15.0);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(stats.applied, 2);
        assert_eq!(stats.discarded(), 1);
        assert_eq!(
            result.to_spec(),
            Tensor::from_spec(&expected).unwrap().to_spec()
        );
    }
}

#[test]
fn test_dense_update_applies_to_sparse_source() {
    let dense_update = TensorSpec::new(dense_xy()).add([("x", 9usize), ("y", 9usize)], 4.0);
    let dense_update = Tensor::from_spec(&dense_update).unwrap();
    let update = CellValues::from_dense(dense_update.as_dense().unwrap());
    assert_eq!(update.len(), 1);

    let result = modify(&source(sparse_xy()), &update, |old, new| old + new).unwrap();
    let expected = TensorSpec::new(sparse_xy())
        .add([("x", "8"), ("y", "9")], 11.0)
        .add([("x", "9"), ("y", "9")], 15.0);
    assert_eq!(result.to_spec(), expected);
}

#[test]
fn test_zero_valued_sparse_update_still_applies() {
    let update = sparse_update(&[("8", "9", 0.0)]);
    let result = modify(&source(dense_xy()), &update, |_, new| new).unwrap();
    assert_eq!(result.as_dense().unwrap().get(&[8, 9]), Some(0.0));
}

#[test]
fn test_update_dimension_order_independent() {
    let mut update = CellValues::new(["y", "x"]).unwrap();
    update.insert(Address::new(["9", "8"]), 2.0).unwrap();

    for ty in [sparse_xy(), dense_xy()] {
        let result = modify(&source(ty.clone()), &update, |_, new| new).unwrap();
        let spec = result.to_spec();
        let key = ty.normalize(&Address::new(["8", "9"])).unwrap();
        assert_eq!(spec.get(&key), Some(2.0));
    }
}

#[test]
fn test_dimension_mismatch_aborts() {
    let update = CellValues::new(["x", "z"]).unwrap();
    let err = modify(&source(sparse_xy()), &update, |_, new| new).unwrap_err();
    assert_eq!(
        err,
        ModifyError::DimensionMismatch {
            expected: vec!["x".to_string(), "y".to_string()],
            actual: vec!["x".to_string(), "z".to_string()],
        }
    );
}

#[test]
fn test_source_not_mutated() {
    for ty in [sparse_xy(), dense_xy()] {
        let original = source(ty);
        let before = original.to_spec();
        let update = sparse_update(&[("8", "9", 100.0)]);
        let result = original.modify(&update, |_, new| new).unwrap();
        assert_ne!(result.to_spec(), before);
        assert_eq!(original.to_spec(), before);
    }
}

#[test]
fn test_type_and_representation_preserved() {
    let update = sparse_update(&[("1", "1", 1.0), ("8", "9", 1.0)]);
    for ty in [sparse_xy(), dense_xy()] {
        let original = source(ty);
        let result = modify(&original, &update, |old, new| old * new).unwrap();
        assert_eq!(result.tensor_type(), original.tensor_type());
        assert_eq!(result.is_sparse(), original.is_sparse());
    }
}

#[test]
fn test_stats_for_sparse_source() {
    let update = sparse_update(&[("7", "9", 2.0), ("8", "9", 2.0)]);
    let (_, stats) = modify_with_stats(&source(sparse_xy()), &update, |_, new| new).unwrap();
    assert_eq!(
        stats,
        ModifyStats {
            applied: 1,
            unknown_key: 1,
            ..ModifyStats::default()
        }
    );
}

#[test]
fn test_options_by_name() {
    let options = ModifyOptions::new().with_function_name("Add").unwrap();
    let update = sparse_update(&[("9", "9", 1.0)]);
    let (result, _) = modify_with_options(&source(dense_xy()), &update, &options).unwrap();
    assert_eq!(result.as_dense().unwrap().get(&[9, 9]), Some(12.0));

    assert!(matches!(
        ModifyOptions::new().with_function_name("sum"),
        Err(ModifyError::UnknownFunction { .. })
    ));
}

#[test]
fn test_strict_rejects_out_of_range() {
    let options = ModifyOptions::new()
        .with_function(CellFunction::Replace)
        .with_strict(true);
    let update = sparse_update(&[("8", "9", 2.0), ("10", "9", 2.0)]);
    let err = modify_with_options(&source(dense_xy()), &update, &options).unwrap_err();
    assert_eq!(
        err,
        ModifyError::Rejected {
            discarded: 1,
            total: 2
        }
    );
}

#[test]
fn test_mixed_type_rejected() {
    let ty = TensorType::new(vec![Dimension::mapped("x"), Dimension::indexed("y", 3)]).unwrap();
    assert!(matches!(
        Tensor::from_spec(&TensorSpec::new(ty)),
        Err(ModifyError::Core(CoreError::MixedType { .. }))
    ));
}

#[test]
fn test_concurrent_modifies_share_source() {
    let shared = Arc::new(source(dense_xy()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let mut update = CellValues::new(["x", "y"]).unwrap();
                update.insert(Address::from_indices(&[i, i]), 1.0).unwrap();
                modify(&shared, &update, |old, new| old + new).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result.as_dense().unwrap().get(&[i, i]), Some(1.0));
    }
    assert_eq!(shared.as_dense().unwrap().get(&[0, 0]), Some(0.0));
}
