//! Recovery of every node lying on some minimum-cost path.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::Hash;

use wayfind_core::Point;

use crate::table::CostTable;
use crate::traits::{Located, StateSpace};

/// Nodes that participate in at least one cost-minimizing path from the
/// search's source(s) to the cheapest of a set of goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalNodeSet<N: Eq + Hash> {
    nodes: HashSet<N>,
}

impl<N: Copy + Eq + Hash + Ord> OptimalNodeSet<N> {
    /// Walk backwards from the cheapest of `goals` over optimal edges.
    ///
    /// An edge `prev -> node` with cost `delta` is optimal iff
    /// `table[prev] + delta == table[node]`. Predecessors are derived from
    /// the forward transitions of every reached node, so `space` must be the
    /// one `table` was built from. Goals that are unreached or costlier than
    /// the cheapest goal are ignored; with no reached goal the set is empty.
    pub fn trace<S>(space: &S, table: &CostTable<N>, goals: &[N]) -> Self
    where
        S: StateSpace<Node = N>,
    {
        let mut nodes = HashSet::new();

        let Some(best) = goals.iter().filter_map(|&g| table.cost(g)).min() else {
            return Self { nodes };
        };

        let mut preds: HashMap<N, Vec<N>> = HashMap::new();
        let mut buf = Vec::with_capacity(8);
        for (node, cost) in table.iter() {
            buf.clear();
            space.transitions(node, &mut buf);
            for &(next, delta) in buf.iter() {
                if next != node && cost.checked_add(delta) == table.cost(next) {
                    preds.entry(next).or_default().push(node);
                }
            }
        }

        let mut stack: Vec<N> = goals
            .iter()
            .copied()
            .filter(|&g| table.cost(g) == Some(best))
            .collect();
        nodes.extend(stack.iter().copied());

        while let Some(node) = stack.pop() {
            let Some(prevs) = preds.get(&node) else {
                continue;
            };
            for &prev in prevs {
                if nodes.insert(prev) {
                    stack.push(prev);
                }
            }
        }

        log::debug!("{} nodes lie on an optimal path", nodes.len());
        Self { nodes }
    }

    /// Whether `node` lies on an optimal path.
    #[inline]
    pub fn contains(&self, node: N) -> bool {
        self.nodes.contains(&node)
    }

    /// Number of nodes (not cells) in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes, sorted.
    pub fn nodes(&self) -> Vec<N> {
        let mut v: Vec<N> = self.nodes.iter().copied().collect();
        v.sort_unstable();
        v
    }

    /// Distinct values of `project` over the set.
    pub fn project<K: Ord>(&self, project: impl Fn(&N) -> K) -> BTreeSet<K> {
        self.nodes.iter().map(project).collect()
    }
}

impl<N: Copy + Eq + Hash + Ord + Located> OptimalNodeSet<N> {
    /// Cells touched by the set; auxiliary states at one cell count once.
    pub fn positions(&self) -> BTreeSet<Point> {
        self.project(|n| n.pos())
    }

    /// Number of distinct cells on some optimal path.
    pub fn cell_count(&self) -> usize {
        self.positions().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::cost_search;
    use crate::spaces::{GridWalk, Pose, TurnCosts, TurningWalk};
    use crate::table::GoalCost;
    use proptest::prelude::*;
    use wayfind_core::{Direction, Grid};

    #[test]
    fn two_by_two_keeps_both_tied_routes() {
        let grid = Grid::parse("..\n..").unwrap();
        let walk = GridWalk::new(&grid);
        let start = Point::new(0, 0);
        let goal = Point::new(1, 1);
        let table = cost_search(&walk, start);
        assert_eq!(table.cost(goal), Some(2));

        let set = OptimalNodeSet::trace(&walk, &table, &[goal]);
        assert_eq!(set.cell_count(), 4);
        assert!(set.contains(start));
    }

    #[test]
    fn detour_cells_are_excluded() {
        let grid = Grid::parse("...\n.#.\n...").unwrap();
        let walk = GridWalk::new(&grid);
        let table = cost_search(&walk, Point::new(0, 0));
        let set = OptimalNodeSet::trace(&walk, &table, &[Point::new(2, 0)]);
        let cells: Vec<_> = set.positions().into_iter().collect();
        assert_eq!(
            cells,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
        );
    }

    #[test]
    fn facings_at_one_cell_count_once() {
        let grid = Grid::parse("...").unwrap();
        let walk = TurningWalk::new(&grid, TurnCosts::default());
        let start = Pose::new(Point::new(0, 0), Direction::West);
        let table = cost_search(&walk, start);
        let goals = TurningWalk::poses_at(Point::new(2, 0));
        let GoalCost::Reached { cost, goals } = table.best_of(goals) else {
            panic!("goal should be reachable");
        };
        assert_eq!(cost, 2002);
        let set = OptimalNodeSet::trace(&walk, &table, &goals);
        assert!(set.len() > set.cell_count());
        assert_eq!(set.cell_count(), 3);
        assert!(set.contains(start));
    }

    #[test]
    fn unreached_goals_give_empty_set() {
        let grid = Grid::parse(".#.").unwrap();
        let walk = GridWalk::new(&grid);
        let table = cost_search(&walk, Point::new(0, 0));
        assert_eq!(table.best_of([Point::new(2, 0)]), GoalCost::Unreachable);
        let set = OptimalNodeSet::trace(&walk, &table, &[Point::new(2, 0)]);
        assert!(set.is_empty());
        let none: [Point; 0] = [];
        assert!(OptimalNodeSet::trace(&walk, &table, &none).is_empty());
    }

    fn arb_open_grid() -> impl Strategy<Value = Grid<u8>> {
        (2i32..7, 2i32..7).prop_flat_map(|(w, h)| {
            prop::collection::vec(prop::bool::weighted(0.25), (w * h) as usize).prop_map(
                move |walls| {
                    Grid::from_fn(w, h, |p| {
                        let i = (p.y * w + p.x) as usize;
                        if walls[i] && p != Point::new(0, 0) { b'#' } else { b'.' }
                    })
                },
            )
        })
    }

    proptest! {
        #[test]
        fn optimal_nodes_never_exceed_goal_cost(grid in arb_open_grid()) {
            let walk = TurningWalk::new(&grid, TurnCosts::default());
            let start = Pose::new(Point::new(0, 0), Direction::East);
            let table = cost_search(&walk, start);
            let end = Point::new(grid.width() - 1, grid.height() - 1);
            if let GoalCost::Reached { cost, goals } = table.best_of(TurningWalk::poses_at(end)) {
                let set = OptimalNodeSet::trace(&walk, &table, &goals);
                prop_assert!(set.contains(start));
                for node in set.nodes() {
                    let c = table.cost(node);
                    prop_assert!(c.is_some_and(|c| c <= cost));
                }
            }
        }
    }
}
