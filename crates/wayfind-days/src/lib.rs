//! Advent of Code 2024 puzzles that reduce to grid or graph search.
//!
//! Each day module exposes `solve(input)` using the puzzle's stated
//! parameters, and `solve_with(input, &config)` for other parameters (the
//! worked examples in the puzzle statements use smaller ones). Both return
//! [`Answers`] or a [`PuzzleError`].
//!
//! | Day | Technique |
//! |---|---|
//! | [`day10`] | cost search on an uphill space, memoized path counting |
//! | [`day11`] | memoized recurrence over `(stone, blinks)` |
//! | [`day16`] | turn-cost search and optimal-path reconstruction |
//! | [`day18`] | shortest path, binary search over obstacle prefixes |
//! | [`day19`] | memoized prefix decomposition |
//! | [`day20`] | start/end distance fields, cheat enumeration |
//! | [`day21`] | memoized press counts over a chain of keypads |
//! | [`day23`] | triangles and maximum clique |

use std::fmt;

use wayfind_core::{Grid, Point};

pub mod day10;
pub mod day11;
pub mod day16;
pub mod day18;
pub mod day19;
pub mod day20;
pub mod day21;
pub mod day23;
mod error;

pub use error::PuzzleError;

/// The two answers of a puzzle, already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Answers {
    pub part1: String,
    pub part2: String,
}

impl Answers {
    pub fn new(part1: impl ToString, part2: impl ToString) -> Self {
        Self {
            part1: part1.to_string(),
            part2: part2.to_string(),
        }
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part 1: {}, part 2: {}", self.part1, self.part2)
    }
}

/// Position of `marker`, warning when it appears more than once.
pub(crate) fn locate(grid: &Grid<u8>, marker: char) -> Result<Point, PuzzleError> {
    let p = grid.locate(marker)?;
    if u8::try_from(marker).is_ok_and(|b| grid.count(&b) > 1) {
        log::warn!("marker '{marker}' appears more than once; using {p}");
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::GridError;

    #[test]
    fn answers_render() {
        let a = Answers::new(7036, "45");
        assert_eq!(a.part1, "7036");
        assert_eq!(a.to_string(), "part 1: 7036, part 2: 45");
    }

    #[test]
    fn locate_reports_missing_marker() {
        let g = Grid::parse("S.\n..").unwrap();
        assert_eq!(locate(&g, 'S'), Ok(Point::new(0, 0)));
        assert_eq!(
            locate(&g, 'E'),
            Err(PuzzleError::Grid(GridError::MissingMarker('E')))
        );
    }

    #[test]
    fn locate_takes_first_duplicate() {
        let g = Grid::parse(".S\nS.").unwrap();
        assert_eq!(locate(&g, 'S'), Ok(Point::new(1, 0)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn answers_round_trip() {
        let a = Answers::new(1, "a,b");
        let json = serde_json::to_string(&a).unwrap();
        let back: Answers = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
