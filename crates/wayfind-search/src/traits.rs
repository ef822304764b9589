use std::fmt::Debug;
use std::hash::Hash;

use wayfind_core::Point;

/// Accumulated path cost. Integer so that optimal-edge checks are exact.
pub type Cost = u64;

/// An implicit graph whose nodes are generated on demand.
///
/// Nodes are `(position, auxiliary state)` values compared by full equality;
/// `Ord` gives the frontier a deterministic tie-break between equal costs.
pub trait StateSpace {
    type Node: Copy + Eq + Hash + Ord + Debug;

    /// Append the successors of `node` with their incremental costs into
    /// `out`. The caller clears `out` before calling.
    ///
    /// Costs must be non-negative; `Cost` being unsigned enforces this.
    fn transitions(&self, node: Self::Node, out: &mut Vec<(Self::Node, Cost)>);
}

/// Nodes that sit on a grid cell.
///
/// Used to collapse several auxiliary states at one cell into a single
/// position when counting cells.
pub trait Located {
    fn pos(&self) -> Point;
}

impl Located for Point {
    #[inline]
    fn pos(&self) -> Point {
        *self
    }
}
