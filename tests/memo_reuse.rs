//! Integration tests for memo table reuse: write-once cells, idempotent
//! re-solves, and the cache-hit accounting that makes reuse observable.

use knapsack_dp::solvers::memoized;
use knapsack_dp::{KnapsackInstance, MemoTable};

fn demo_instance() -> KnapsackInstance {
    KnapsackInstance::from_parallel(10, &[5, 4, 6, 3], &[10, 40, 30, 50]).unwrap()
}

#[test]
fn second_solve_is_a_single_cache_hit() {
    let instance = demo_instance();
    let mut table = MemoTable::new(instance.num_items(), instance.capacity());

    let (first, first_stats) = memoized::max_value_instrumented(&instance, &mut table);
    assert_eq!(first, 90);
    assert!(first_stats.evaluations > first_stats.cache_hits);

    // The top cell is known now, so the re-solve answers from the table
    // without touching the recurrence again.
    let (second, second_stats) = memoized::max_value_instrumented(&instance, &mut table);
    assert_eq!(second, first);
    assert_eq!(second_stats.evaluations, 1);
    assert_eq!(second_stats.cache_hits, 1);
}

#[test]
fn re_solve_leaves_the_table_unchanged() {
    let instance = demo_instance();
    let mut table = MemoTable::new(instance.num_items(), instance.capacity());

    memoized::max_value_with_table(&instance, &mut table);
    let snapshot = table.clone();

    memoized::max_value_with_table(&instance, &mut table);
    assert_eq!(table, snapshot);
}

#[test]
fn known_cells_grow_monotonically_and_stay_bounded() {
    let instance = demo_instance();
    let mut table = MemoTable::new(instance.num_items(), instance.capacity());
    assert_eq!(table.known_cells(), 0);

    memoized::max_value_with_table(&instance, &mut table);
    let after_first = table.known_cells();
    assert!(after_first > 0);
    assert!(after_first <= table.num_cells());

    memoized::max_value_with_table(&instance, &mut table);
    assert_eq!(table.known_cells(), after_first);
}

#[test]
fn populated_cells_hold_subproblem_optima() {
    let instance = demo_instance();
    let mut table = MemoTable::new(instance.num_items(), instance.capacity());
    memoized::max_value_with_table(&instance, &mut table);

    // Every known cell (n, c) must equal the optimum of the instance
    // restricted to its first n items with capacity c.
    for n in 0..=instance.num_items() {
        for c in 0..=instance.capacity() {
            if let Some(cached) = table.get(n, c) {
                let weights: Vec<usize> =
                    instance.items()[..n].iter().map(|item| item.weight).collect();
                let values: Vec<i64> =
                    instance.items()[..n].iter().map(|item| item.value).collect();
                let restricted = KnapsackInstance::from_parallel(c, &weights, &values).unwrap();
                assert_eq!(
                    cached,
                    memoized::max_value(&restricted),
                    "stale cell at ({n}, {c})"
                );
            }
        }
    }
}

#[test]
fn fresh_table_per_call_matches_shared_table() {
    let instance = demo_instance();
    let mut shared = MemoTable::new(instance.num_items(), instance.capacity());
    assert_eq!(
        memoized::max_value(&instance),
        memoized::max_value_with_table(&instance, &mut shared)
    );
}
