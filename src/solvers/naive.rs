//! Naive recursive knapsack evaluator.
//!
//! Direct evaluation of the recurrence with no caching. Each call on
//! subproblem (n, c) branches into up to two subcalls, so running time is
//! exponential in the item count. Intended as a correctness baseline and for
//! very small instances; use [`memoized`](crate::solvers::memoized)
//! otherwise.

use crate::instance::KnapsackInstance;

/// Maximum achievable value for the full instance.
pub fn max_value(instance: &KnapsackInstance) -> i64 {
    best(instance, instance.num_items(), instance.capacity())
}

/// The recurrence on subproblem (n, c): best value using the first `n`
/// items within capacity `c`.
fn best(instance: &KnapsackInstance, n: usize, c: usize) -> i64 {
    if n == 0 || c == 0 {
        return 0;
    }
    // Items are numbered 1..=N in the recurrence; item n sits at index n-1.
    let weight = instance.weight(n - 1);
    if weight > c {
        return best(instance, n - 1, c);
    }
    let exclude = best(instance, n - 1, c);
    let include = instance.value(n - 1) + best(instance, n - 1, c - weight);
    exclude.max(include)
}
