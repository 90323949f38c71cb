//! The memo table backing the top-down solver.
//!
//! A [`MemoTable`] caches results of the subproblem (n, c): the best value
//! achievable using the first `n` items within capacity `c`. Cells start
//! unknown and transition to known exactly once per top-level solve; a known
//! cell is never invalidated or rewritten with a different value.
//!
//! The table is a flat `Vec<Option<i64>>` of (N+1)×(C+1) cells rather than a
//! nested table, keeping lookups a single index computation away.
//!
//! A table is valid only for the instance dimensions it was sized against:
//! reusing it with a different item sequence produces meaningless answers.

/// Lazily populated (N+1)×(C+1) subproblem cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoTable {
    cells: Vec<Option<i64>>,
    num_items: usize,
    capacity: usize,
}

impl MemoTable {
    /// Allocate a table for `num_items` items and capacity `capacity`,
    /// every cell unknown.
    pub fn new(num_items: usize, capacity: usize) -> Self {
        Self {
            cells: vec![None; (num_items + 1) * (capacity + 1)],
            num_items,
            capacity,
        }
    }

    /// Item dimension N the table was sized for.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Capacity dimension C the table was sized for.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    fn index(&self, n: usize, c: usize) -> usize {
        debug_assert!(n <= self.num_items && c <= self.capacity);
        n * (self.capacity + 1) + c
    }

    /// Cached value for subproblem (n, c), if known.
    #[inline]
    pub fn get(&self, n: usize, c: usize) -> Option<i64> {
        self.cells[self.index(n, c)]
    }

    /// Record the resolved value for subproblem (n, c).
    ///
    /// Writes are idempotent: a second write to the same cell must carry the
    /// same value (the recurrence is deterministic), so the cell never
    /// changes once known.
    #[inline]
    pub fn set(&mut self, n: usize, c: usize, value: i64) {
        let idx = self.index(n, c);
        debug_assert!(
            self.cells[idx].is_none() || self.cells[idx] == Some(value),
            "memo cell ({n}, {c}) rewritten with a different value"
        );
        self.cells[idx] = Some(value);
    }

    /// Number of cells currently known.
    pub fn known_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Total cell count (N+1)×(C+1).
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }
}
