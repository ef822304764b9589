use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::Cost;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Entries popped from the frontier, stale ones included.
    pub pops: usize,
    /// Popped entries discarded because a cheaper cost was already known.
    pub stale: usize,
    /// Successful cost improvements.
    pub relaxations: usize,
}

/// Best cost found for every reached node.
///
/// The table is only written by the search that produced it; once returned
/// it is frozen. Unreached nodes are simply absent.
#[derive(Debug, Clone)]
pub struct CostTable<N> {
    costs: HashMap<N, Cost>,
    stats: SearchStats,
}

impl<N: Copy + Eq + Hash> CostTable<N> {
    pub(crate) fn new() -> Self {
        Self {
            costs: HashMap::new(),
            stats: SearchStats::default(),
        }
    }

    /// Record `cost` for `node` if it is strictly cheaper than the known one.
    pub(crate) fn improve(&mut self, node: N, cost: Cost) -> bool {
        match self.costs.get_mut(&node) {
            Some(best) if *best <= cost => false,
            Some(best) => {
                *best = cost;
                true
            }
            None => {
                self.costs.insert(node, cost);
                true
            }
        }
    }

    pub(crate) fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }

    /// Minimum cost to reach `node`, or `None` when unreached.
    #[inline]
    pub fn cost(&self, node: N) -> Option<Cost> {
        self.costs.get(&node).copied()
    }

    /// Whether `node` was reached.
    #[inline]
    pub fn contains(&self, node: N) -> bool {
        self.costs.contains_key(&node)
    }

    /// Number of reached nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// All reached nodes with their costs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (N, Cost)> + '_ {
        self.costs.iter().map(|(&n, &c)| (n, c))
    }

    /// Counters from the search that built this table.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimum cost over `goals`, together with every goal achieving it.
    ///
    /// Used when one target position has several auxiliary states (e.g. the
    /// four facings at the end cell).
    pub fn best_of(&self, goals: impl IntoIterator<Item = N>) -> GoalCost<N> {
        let mut best: Option<Cost> = None;
        let mut winners = Vec::new();
        for goal in goals {
            let Some(c) = self.cost(goal) else {
                continue;
            };
            match best {
                Some(b) if c > b => {}
                Some(b) if c == b => winners.push(goal),
                _ => {
                    best = Some(c);
                    winners.clear();
                    winners.push(goal);
                }
            }
        }
        match best {
            Some(cost) => GoalCost::Reached {
                cost,
                goals: winners,
            },
            None => GoalCost::Unreachable,
        }
    }
}

impl<N: Eq + Hash> PartialEq for CostTable<N> {
    /// Tables are equal when they hold the same costs; stats are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.costs == other.costs
    }
}

impl<N: Eq + Hash> Eq for CostTable<N> {}

/// Outcome of looking up a set of goal nodes in a [`CostTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalCost<N> {
    /// At least one goal was reached; `goals` share the minimum `cost`.
    Reached { cost: Cost, goals: Vec<N> },
    /// No goal has a finite cost. A normal result, not an error.
    Unreachable,
}

impl<N> GoalCost<N> {
    /// The minimum cost, if any goal was reached.
    pub fn cost(&self) -> Option<Cost> {
        match self {
            GoalCost::Reached { cost, .. } => Some(*cost),
            GoalCost::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, GoalCost::Reached { .. })
    }
}
