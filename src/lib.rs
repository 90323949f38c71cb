//! 0/1 knapsack solvers: naive recursion and top-down memoization.
//!
//! Given a set of items, each with a positive integer weight and a (possibly
//! negative) value, and a capacity `C`, the 0/1 knapsack problem asks for the
//! maximum total value of a subset of items whose total weight does not
//! exceed `C`. Each item is taken whole or not at all.
//!
//! This crate provides two implementations of the same contract:
//! - [`solvers::naive`]: the textbook exponential-time recursion, useful as a
//!   correctness baseline and for very small instances.
//! - [`solvers::memoized`]: the same recurrence backed by a [`MemoTable`],
//!   guaranteeing O(N×C) recurrence evaluations.
//!
//! ## Quick start
//! ```
//! use knapsack_dp::{solvers::memoized, KnapsackInstance};
//!
//! let instance = KnapsackInstance::from_parallel(10, &[5, 4, 6, 3], &[10, 40, 30, 50]).unwrap();
//! assert_eq!(memoized::max_value(&instance), 90);
//! ```
//!
//! ## Scope
//! Both solvers return the optimal value only; neither reconstructs which
//! items achieve it. Instances are validated once at construction
//! ([`KnapsackInstance`]); the solvers themselves are total and pure.
//!
//! The memoized recursion has call-stack depth up to N. For instances large
//! enough that this matters, the standard re-architecture is a bottom-up
//! table fill in increasing (n, c) order; this crate deliberately stays with
//! the recursive formulation.

pub mod error;
pub mod instance;
pub mod memo;
pub mod solvers;

pub use crate::error::InvalidInput;
pub use crate::instance::{Item, KnapsackInstance};
pub use crate::memo::MemoTable;
pub use crate::solvers::memoized::SolveStats;
