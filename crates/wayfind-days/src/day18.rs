//! Day 18: RAM Run.
//!
//! Bytes fall one at a time onto a square memory space, corrupting the cell
//! at `x,y`. Part 1 is the shortest walk from the top-left corner to the
//! bottom-right one after the first bytes have fallen. Part 2 is the first
//! byte that cuts the exit off.

use std::collections::HashSet;

use wayfind_core::{Grid, Point};
use wayfind_search::{DistanceField, GridWalk, WALL, cost_search};

use crate::{Answers, PuzzleError};

const SAFE: u8 = b'.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MemoryConfig {
    /// Side length of the memory space.
    pub size: i32,
    /// Bytes fallen before the part 1 walk.
    pub fallen: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size: 71,
            fallen: 1024,
        }
    }
}

/// Parse one `x,y` coordinate per line, each inside a `size`×`size` space.
pub fn parse_bytes(input: &str, size: i32) -> Result<Vec<Point>, PuzzleError> {
    let mut bytes = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let coord = |s: &str| s.trim().parse::<i32>().ok();
        let p = match line.split_once(',') {
            Some((x, y)) => coord(x).zip(coord(y)).map(|(x, y)| Point::new(x, y)),
            None => None,
        }
        .ok_or_else(|| PuzzleError::invalid(i + 1, format!("expected `x,y`, got `{line}`")))?;
        if !(0..size).contains(&p.x) || !(0..size).contains(&p.y) {
            return Err(PuzzleError::invalid(
                i + 1,
                format!("{p} is outside the {size}x{size} space"),
            ));
        }
        bytes.push(p);
    }
    Ok(bytes)
}

/// The memory space with `bytes` corrupted.
pub fn corrupt(size: i32, bytes: &[Point]) -> Grid<u8> {
    let fallen: HashSet<Point> = bytes.iter().copied().collect();
    Grid::from_fn(size, size, |p| if fallen.contains(&p) { WALL } else { SAFE })
}

fn exit(size: i32) -> Point {
    Point::new(size - 1, size - 1)
}

/// Fewest steps from the top-left corner to the exit, `None` if cut off.
pub fn shortest_walk(size: i32, bytes: &[Point]) -> Option<u64> {
    let grid = corrupt(size, bytes);
    if grid.at(Point::ZERO) != Some(&SAFE) {
        return None;
    }
    cost_search(&GridWalk::new(&grid), Point::ZERO).cost(exit(size))
}

fn is_open(size: i32, bytes: &[Point]) -> bool {
    let grid = corrupt(size, bytes);
    if grid.at(Point::ZERO) != Some(&SAFE) {
        return false;
    }
    let field = DistanceField::bfs(grid.bounds(), &[Point::ZERO], |p| grid.at(p) == Some(&SAFE));
    field.at(exit(size)).is_some()
}

/// First byte whose fall cuts the exit off, found by binary search over the
/// number of fallen bytes. `None` if the exit stays reachable.
pub fn first_blocking(size: i32, bytes: &[Point]) -> Option<Point> {
    if is_open(size, bytes) {
        return None;
    }
    // Invariant: open after `lo` bytes, closed after `hi`.
    let (mut lo, mut hi) = (0, bytes.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if is_open(size, &bytes[..mid]) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    log::trace!("exit closes after {hi} bytes");
    hi.checked_sub(1).and_then(|i| bytes.get(i)).copied()
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    solve_with(input, &MemoryConfig::default())
}

pub fn solve_with(input: &str, config: &MemoryConfig) -> Result<Answers, PuzzleError> {
    let bytes = parse_bytes(input, config.size)?;
    let fallen = &bytes[..config.fallen.min(bytes.len())];

    let steps = shortest_walk(config.size, fallen).ok_or(PuzzleError::NoPath)?;
    let blocker = first_blocking(config.size, &bytes);
    log::debug!("day 18: {steps} steps after {} bytes, blocker {blocker:?}", fallen.len());

    let part2 = match blocker {
        Some(p) => format!("{},{}", p.x, p.y),
        None => "none".to_string(),
    };
    Ok(Answers::new(steps, part2))
}
