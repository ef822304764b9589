//! Lazily filled cache for recurrences over a DAG of states.
//!
//! A problem describes, for every key, the keys it depends on and how to
//! combine their values. [`Memo::get`] resolves dependencies on demand and
//! computes each key at most once.
//!
//! # Warning: no cycle detection
//!
//! Dependencies must form a directed acyclic graph. A cycle recurses until
//! the stack overflows.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

/// A recurrence defined by its dependency structure.
pub trait Recurrence<K, V> {
    /// Keys whose values `key` depends on. Empty for base cases.
    fn deps(&self, key: &K) -> Vec<K>;

    /// Value of `key` given the values of [`deps`](Self::deps), in order.
    fn compute(&self, key: &K, deps: Vec<V>) -> V;
}

/// Memoizing evaluator for a [`Recurrence`].
pub struct Memo<K, V, P> {
    table: RefCell<HashMap<K, V>>,
    problem: P,
}

impl<K, V, P> Memo<K, V, P>
where
    K: Clone + Eq + Hash,
    V: Clone,
    P: Recurrence<K, V>,
{
    pub fn new(problem: P) -> Self {
        Self {
            table: RefCell::new(HashMap::new()),
            problem,
        }
    }

    /// Value for `key`, computing it and its dependencies if needed.
    pub fn get(&self, key: &K) -> V {
        if let Some(v) = self.table.borrow().get(key) {
            return v.clone();
        }

        // No borrow is held while dependencies recurse.
        let deps: Vec<V> = self
            .problem
            .deps(key)
            .iter()
            .map(|dep| self.get(dep))
            .collect();
        let value = self.problem.compute(key, deps);

        self.table
            .borrow_mut()
            .entry(key.clone())
            .or_insert(value)
            .clone()
    }

    /// Number of cached keys.
    pub fn len(&self) -> usize {
        self.table.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.borrow().is_empty()
    }

    /// The problem definition.
    pub fn problem(&self) -> &P {
        &self.problem
    }
}
