//! Memoized (top-down dynamic programming) knapsack evaluator.
//!
//! Same recurrence as [`naive`](crate::solvers::naive), but each subproblem
//! (n, c) is resolved at most once per table: the memo check comes first,
//! base cases included, and the resolved value is written back before
//! returning. With N items and capacity C this bounds the work at
//! (N+1)×(C+1) recurrence evaluations.
//!
//! The table is threaded through the recursion by `&mut` so writes made in
//! deeper calls are visible to sibling branches and shallower frames. A cell
//! is written only after its full recurrence has resolved; there are no
//! placeholder writes, so a known cell is always a final answer.

use crate::instance::KnapsackInstance;
use crate::memo::MemoTable;

/// Counters for one solver invocation.
///
/// `evaluations` counts recurrence entries (calls into the subproblem
/// function); `cache_hits` counts how many of those were answered from the
/// table without recomputation. Tests use these to observe that re-solving
/// on a populated table does no new work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub evaluations: u64,
    pub cache_hits: u64,
}

/// Maximum achievable value, with a fresh table allocated for this call.
pub fn max_value(instance: &KnapsackInstance) -> i64 {
    let mut table = MemoTable::new(instance.num_items(), instance.capacity());
    max_value_with_table(instance, &mut table)
}

/// Maximum achievable value, reusing a caller-supplied table.
///
/// The table must have been sized for this instance's dimensions, and must
/// only ever be reused with the same instance; answers cached for one item
/// sequence are wrong for any other.
///
/// # Panics
/// Panics if the table dimensions do not match the instance.
pub fn max_value_with_table(instance: &KnapsackInstance, table: &mut MemoTable) -> i64 {
    let (value, _stats) = max_value_instrumented(instance, table);
    value
}

/// As [`max_value_with_table`], additionally reporting [`SolveStats`].
pub fn max_value_instrumented(
    instance: &KnapsackInstance,
    table: &mut MemoTable,
) -> (i64, SolveStats) {
    assert!(
        table.num_items() == instance.num_items() && table.capacity() == instance.capacity(),
        "memo table sized for ({}, {}) used with instance of ({}, {})",
        table.num_items(),
        table.capacity(),
        instance.num_items(),
        instance.capacity()
    );

    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!(
        "memoized_solve",
        items = instance.num_items(),
        capacity = instance.capacity()
    );
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut stats = SolveStats::default();
    let value = best(
        instance,
        table,
        &mut stats,
        instance.num_items(),
        instance.capacity(),
    );

    #[cfg(feature = "tracing")]
    tracing::debug!(
        value,
        evaluations = stats.evaluations,
        cache_hits = stats.cache_hits,
        "solve finished"
    );

    (value, stats)
}

fn best(
    instance: &KnapsackInstance,
    table: &mut MemoTable,
    stats: &mut SolveStats,
    n: usize,
    c: usize,
) -> i64 {
    stats.evaluations += 1;

    if let Some(known) = table.get(n, c) {
        stats.cache_hits += 1;
        return known;
    }

    let result = if n == 0 || c == 0 {
        0
    } else {
        let weight = instance.weight(n - 1);
        if weight > c {
            best(instance, table, stats, n - 1, c)
        } else {
            let exclude = best(instance, table, stats, n - 1, c);
            let include = instance.value(n - 1) + best(instance, table, stats, n - 1, c - weight);
            exclude.max(include)
        }
    };

    table.set(n, c, result);
    result
}
