//! Reference driver for the knapsack solvers.
//!
//! Runs the fixed four-item example through both solvers and prints the
//! maximum value along with per-solver wall time.
//!
//! Run with: `cargo run --bin knapsack_demo`

use std::time::Instant;

use knapsack_dp::solvers::{memoized, naive};
use knapsack_dp::{KnapsackInstance, MemoTable};

fn main() {
    let weights = [5usize, 4, 6, 3];
    let values = [10i64, 40, 30, 50];
    let capacity = 10;

    let instance = match KnapsackInstance::from_parallel(capacity, &weights, &values) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("knapsack_demo: {err}");
            std::process::exit(2);
        }
    };

    println!(
        "Instance: {} items, capacity {}",
        instance.num_items(),
        instance.capacity()
    );
    for (index, item) in instance.items().iter().enumerate() {
        println!("  item {index}: weight {:>2}  value {:>3}", item.weight, item.value);
    }
    println!();

    let start = Instant::now();
    let naive_value = naive::max_value(&instance);
    let naive_elapsed = start.elapsed();
    println!("naive:    max value {naive_value}  ({naive_elapsed:?})");

    let mut table = MemoTable::new(instance.num_items(), instance.capacity());
    let start = Instant::now();
    let (memo_value, stats) = memoized::max_value_instrumented(&instance, &mut table);
    let memo_elapsed = start.elapsed();
    println!(
        "memoized: max value {memo_value}  ({memo_elapsed:?}, {} evaluations, {} cache hits, {}/{} cells resolved)",
        stats.evaluations,
        stats.cache_hits,
        table.known_cells(),
        table.num_cells()
    );
}
