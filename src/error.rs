//! Input validation errors.
//!
//! The only fallible surface of the crate is [`KnapsackInstance`]
//! construction; once an instance exists, the solvers are total.
//!
//! [`KnapsackInstance`]: crate::instance::KnapsackInstance

use thiserror::Error;

/// Rejected instance input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Parallel weight/value slices must describe the same item count.
    #[error("weights and values differ in length ({weights} weights vs {values} values)")]
    LengthMismatch { weights: usize, values: usize },

    /// Item weights must be positive integers.
    #[error("item {index} has zero weight")]
    ZeroWeight { index: usize },
}
