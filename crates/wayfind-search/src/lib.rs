//! State-space search over grids and implicit graphs.
//!
//! This crate provides the search toolkit shared by the puzzle solvers:
//!
//! - **Cost search** over any [`StateSpace`] ([`cost_search`], [`cost_search_from`]),
//!   a Dijkstra generalization for non-uniform, direction-dependent costs
//! - **Path reconstruction** of every node on some optimal path ([`OptimalNodeSet`])
//! - **Distance fields** from unit-cost multi-source BFS ([`DistanceField`])
//! - **Grid spaces**: plain 4-neighbour walking ([`GridWalk`]) and walking
//!   with a facing and turn cost ([`TurningWalk`])
//! - **Memoized recurrences** ([`Memo`], [`Recurrence`])
//! - **Cliques**: triangle listing and Bron–Kerbosch ([`clique`])
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`StateSpace`] | cost search, reconstruction |
//! | [`Located`] | collapsing nodes to cells ([`OptimalNodeSet::positions`]) |
//! | [`Recurrence`] | [`Memo`] |

mod bfs;
pub mod clique;
mod distance;
mod frontier;
mod memo;
mod reconstruct;
mod search;
mod spaces;
mod table;
mod traits;

pub use bfs::{DistanceField, UNREACHABLE};
pub use distance::{diamond, manhattan};
pub use frontier::Frontier;
pub use memo::{Memo, Recurrence};
pub use reconstruct::OptimalNodeSet;
pub use search::{cost_search, cost_search_from};
pub use spaces::{GridWalk, Pose, TurnCosts, TurningWalk, WALL};
pub use table::{CostTable, GoalCost, SearchStats};
pub use traits::{Cost, Located, StateSpace};
