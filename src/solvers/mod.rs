//! Alternative implementations of the knapsack value contract.
//!
//! Both solvers compute the same function: the maximum total value of a
//! subset of items whose total weight fits the capacity. [`naive`] evaluates
//! the recurrence directly; [`memoized`] caches subproblems in a
//! [`MemoTable`](crate::memo::MemoTable).

pub mod memoized;
pub mod naive;
