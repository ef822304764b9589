//! Min-priority queue of `(cost, node)` entries.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::traits::Cost;

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// cost first. Equal costs pop the smallest node first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry<N> {
    cost: Cost,
    node: N,
}

impl<N: Ord> Ord for Entry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<N: Ord> PartialOrd for Entry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The search frontier.
///
/// The frontier may hold several entries for the same node; consumers are
/// expected to discard entries whose cost is worse than the best known one.
#[derive(Debug, Clone)]
pub struct Frontier<N> {
    heap: BinaryHeap<Entry<N>>,
}

impl<N: Ord> Default for Frontier<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Ord> Frontier<N> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    /// Insert an entry. O(log n).
    #[inline]
    pub fn push(&mut self, cost: Cost, node: N) {
        self.heap.push(Entry { cost, node });
    }

    /// Remove and return the cheapest entry, or `None` when empty. O(log n).
    #[inline]
    pub fn pop_min(&mut self) -> Option<(Cost, N)> {
        self.heap.pop().map(|e| (e.cost, e.node))
    }

    /// Cost of the cheapest entry without removing it.
    #[inline]
    pub fn peek_cost(&self) -> Option<Cost> {
        self.heap.peek().map(|e| e.cost)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}
