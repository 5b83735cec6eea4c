//! Basic modify example for celltensor-exec
//!
//! This example demonstrates:
//! - Building sparse and dense tensors from descriptions
//! - Extracting a cell update set
//! - Modifying with built-in and custom combining functions
//! - Reading applied and discarded counts

use celltensor_core::{TensorSpec, TensorType};
use celltensor_exec::tracing_support::{init_tracing, TracingConfig};
use celltensor_exec::{modify, modify_with_options, modify_with_stats, CellFunction, ModifyOptions, Tensor};
use celltensor_sparse::{CellValues, SparseTensor};

fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default())?;

    println!("celltensor - Basic Modify Example");
    println!("=================================\n");

    let sparse_type = TensorType::sparse(&["x", "y"])?;
    let dense_type = TensorType::dense(&[("x", 10), ("y", 10)])?;

    let update_spec = TensorSpec::new(sparse_type.clone())
        .add([("x", "8"), ("y", "9")], 2.0)
        .add([("x", "7"), ("y", "9")], 3.0)
        .add([("x", "10"), ("y", "9")], 4.0);
    let update = CellValues::from_sparse(&SparseTensor::from_spec(&update_spec)?);
    println!("Update set: {}\n", update_spec);

    // Example 1: Sparse source, replace
    println!("1. Sparse source (replace)");
    println!("--------------------------");
    let sparse = Tensor::from_spec(
        &TensorSpec::new(sparse_type)
            .add([("x", "8"), ("y", "9")], 11.0)
            .add([("x", "9"), ("y", "9")], 11.0),
    )?;
    let (result, stats) = modify_with_stats(&sparse, &update, CellFunction::Replace.as_fn())?;
    println!("Result: {}", result.to_spec());
    println!("{:?}\n", stats);

    // Example 2: Dense source, custom function
    println!("2. Dense source (old + 10 * new)");
    println!("--------------------------------");
    let dense = Tensor::from_spec(
        &TensorSpec::new(dense_type).add([("x", 8usize), ("y", 9usize)], 11.0),
    )?;
    let result = modify(&dense, &update, |old, new| old + 10.0 * new)?;
    if let Some(tensor) = result.as_dense() {
        println!("Cell (8,9): {:?}", tensor.get(&[8, 9]));
        println!("Cell (7,9): {:?}\n", tensor.get(&[7, 9]));
    }

    // Example 3: Options from configuration strings
    println!("3. Options by name (strict)");
    println!("---------------------------");
    let options = ModifyOptions::new()
        .with_function_name("max")?
        .with_strict(true);
    match modify_with_options(&dense, &update, &options) {
        Ok((_, stats)) => println!("Applied {} cells", stats.applied),
        Err(e) => println!("Rejected: {}", e),
    }

    Ok(())
}
