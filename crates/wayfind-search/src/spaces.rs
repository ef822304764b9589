//! Ready-made state spaces over character grids.

use wayfind_core::{Direction, Grid, Point};

use crate::traits::{Cost, Located, StateSpace};

/// Byte treated as impassable by default.
pub const WALL: u8 = b'#';

/// 4-neighbour walk with unit cost and no auxiliary state.
#[derive(Debug, Clone, Copy)]
pub struct GridWalk<'g> {
    grid: &'g Grid<u8>,
    wall: u8,
}

impl<'g> GridWalk<'g> {
    pub fn new(grid: &'g Grid<u8>) -> Self {
        Self { grid, wall: WALL }
    }

    /// Use a different wall byte.
    pub fn with_wall(mut self, wall: u8) -> Self {
        self.wall = wall;
        self
    }

    /// Whether `p` is inside the grid and not a wall.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(|&c| c != self.wall)
    }
}

impl StateSpace for GridWalk<'_> {
    type Node = Point;

    fn transitions(&self, node: Point, out: &mut Vec<(Point, Cost)>) {
        for n in node.neighbors_4() {
            if self.is_open(n) {
                out.push((n, 1));
            }
        }
    }
}

/// A cell plus the direction being faced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub pos: Point,
    pub facing: Direction,
}

impl Pose {
    #[inline]
    pub const fn new(pos: Point, facing: Direction) -> Self {
        Self { pos, facing }
    }
}

impl Located for Pose {
    #[inline]
    fn pos(&self) -> Point {
        self.pos
    }
}

/// Cost model for [`TurningWalk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TurnCosts {
    /// Moving one cell forward.
    pub step: Cost,
    /// Rotating 90° in place.
    pub turn: Cost,
}

impl Default for TurnCosts {
    fn default() -> Self {
        Self {
            step: 1,
            turn: 1000,
        }
    }
}

/// Walk where the node is a [`Pose`]: move forward into an open cell, or
/// rotate a quarter turn either way in place.
#[derive(Debug, Clone, Copy)]
pub struct TurningWalk<'g> {
    grid: &'g Grid<u8>,
    wall: u8,
    costs: TurnCosts,
}

impl<'g> TurningWalk<'g> {
    pub fn new(grid: &'g Grid<u8>, costs: TurnCosts) -> Self {
        Self {
            grid,
            wall: WALL,
            costs,
        }
    }

    /// Use a different wall byte.
    pub fn with_wall(mut self, wall: u8) -> Self {
        self.wall = wall;
        self
    }

    /// The four poses at cell `p`, one per facing.
    pub fn poses_at(p: Point) -> [Pose; 4] {
        Direction::ALL.map(|d| Pose::new(p, d))
    }

    #[inline]
    fn is_open(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(|&c| c != self.wall)
    }
}

impl StateSpace for TurningWalk<'_> {
    type Node = Pose;

    fn transitions(&self, node: Pose, out: &mut Vec<(Pose, Cost)>) {
        let ahead = node.pos.step(node.facing);
        if self.is_open(ahead) {
            out.push((Pose::new(ahead, node.facing), self.costs.step));
        }
        out.push((Pose::new(node.pos, node.facing.turn_left()), self.costs.turn));
        out.push((Pose::new(node.pos, node.facing.turn_right()), self.costs.turn));
    }
}
