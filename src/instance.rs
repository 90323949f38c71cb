//! Knapsack problem instances.
//!
//! A [`KnapsackInstance`] is a validated, immutable problem description:
//! an ordered item sequence and a capacity. All validation happens here so
//! the solvers can assume well-formed input.

use crate::error::InvalidInput;

/// A single knapsack item.
///
/// Weights are positive integers (enforced at instance construction).
/// Values are signed: negative values are accepted and handled correctly by
/// the recurrence, since the optimum may always exclude an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: i64,
}

/// A validated 0/1 knapsack instance.
#[derive(Debug, Clone)]
pub struct KnapsackInstance {
    items: Vec<Item>,
    capacity: usize,
}

impl KnapsackInstance {
    /// Build an instance from a capacity and an item sequence.
    ///
    /// Rejects items with zero weight.
    pub fn new(capacity: usize, items: Vec<Item>) -> Result<Self, InvalidInput> {
        if let Some(index) = items.iter().position(|item| item.weight == 0) {
            return Err(InvalidInput::ZeroWeight { index });
        }
        Ok(Self { items, capacity })
    }

    /// Build an instance from parallel weight and value slices.
    ///
    /// The slices must have equal length; `weights[i]` and `values[i]`
    /// describe item `i`.
    pub fn from_parallel(
        capacity: usize,
        weights: &[usize],
        values: &[i64],
    ) -> Result<Self, InvalidInput> {
        if weights.len() != values.len() {
            return Err(InvalidInput::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        let items = weights
            .iter()
            .zip(values)
            .map(|(&weight, &value)| Item { weight, value })
            .collect();
        Self::new(capacity, items)
    }

    /// Number of items N.
    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    /// Knapsack capacity C.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The item sequence, in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Weight of item `index` (0-based).
    #[inline]
    pub fn weight(&self, index: usize) -> usize {
        self.items[index].weight
    }

    /// Value of item `index` (0-based).
    #[inline]
    pub fn value(&self, index: usize) -> i64 {
        self.items[index].value
    }

    /// Extend the instance with one more item, keeping capacity fixed.
    ///
    /// Used by tests to check that adding an item never lowers the optimum.
    pub fn with_item(&self, item: Item) -> Result<Self, InvalidInput> {
        let mut items = self.items.clone();
        items.push(item);
        Self::new(self.capacity, items)
    }
}
