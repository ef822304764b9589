//! Day 16: Reindeer Maze.
//!
//! The reindeer starts on `S` facing east and pays 1 per step forward and
//! 1000 per quarter turn. Part 1 is the lowest score to reach `E`; part 2
//! counts the tiles on at least one lowest-score route.

use wayfind_core::{Direction, Grid, Point};
use wayfind_search::{
    Cost, GoalCost, OptimalNodeSet, Pose, TurnCosts, TurningWalk, cost_search,
};

use crate::{Answers, PuzzleError};

/// Parameters of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub costs: TurnCosts,
    pub start: char,
    pub end: char,
    /// Initial facing on the start tile.
    pub facing: Direction,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            costs: TurnCosts::default(),
            start: 'S',
            end: 'E',
            facing: Direction::East,
        }
    }
}

/// Outcome of a maze search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeReport {
    /// Lowest score over every facing at the end tile.
    pub cost: Cost,
    /// Tiles on at least one lowest-score route, start and end included.
    pub tiles: usize,
}

/// Search the maze from `start` to any facing on `end`. `None` when the end
/// is walled off.
pub fn analyze(grid: &Grid<u8>, start: Pose, end: Point, costs: TurnCosts) -> Option<MazeReport> {
    let space = TurningWalk::new(grid, costs);
    let table = cost_search(&space, start);
    let goals = TurningWalk::poses_at(end);

    let GoalCost::Reached { cost, .. } = table.best_of(goals) else {
        return None;
    };
    let tiles = OptimalNodeSet::trace(&space, &table, &goals).cell_count();
    Some(MazeReport { cost, tiles })
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    solve_with(input, &MazeConfig::default())
}

pub fn solve_with(input: &str, config: &MazeConfig) -> Result<Answers, PuzzleError> {
    let grid = Grid::parse(input)?;
    let start = crate::locate(&grid, config.start)?;
    let end = crate::locate(&grid, config.end)?;

    let report = analyze(&grid, Pose::new(start, config.facing), end, config.costs)
        .ok_or(PuzzleError::NoPath)?;
    log::debug!(
        "day 16: score {} from {start} to {end}, {} tiles on best routes",
        report.cost,
        report.tiles
    );
    Ok(Answers::new(report.cost, report.tiles))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn first_example() {
        assert_eq!(solve(FIRST), Ok(Answers::new(7036, 45)));
    }

    #[test]
    fn second_example() {
        assert_eq!(solve(SECOND), Ok(Answers::new(11048, 64)));
    }

    #[test]
    fn straight_corridor() {
        assert_eq!(solve("#####\n#S.E#\n#####"), Ok(Answers::new(2, 3)));
    }

    #[test]
    fn walled_off_end() {
        assert_eq!(solve("#####\n#S#E#\n#####"), Err(PuzzleError::NoPath));
    }

    #[test]
    fn missing_marker() {
        assert!(matches!(solve("#S.#"), Err(PuzzleError::Grid(_))));
    }

    #[test]
    fn cheaper_turns_change_the_score() {
        let config = MazeConfig {
            costs: TurnCosts { step: 1, turn: 1 },
            ..MazeConfig::default()
        };
        let answers = solve_with("####\n#.E#\n#S.#\n####", &config).unwrap();
        // East, turn, north beats turn, north, turn, east.
        assert_eq!(answers, Answers::new(3, 3));
    }

    #[test]
    fn analyze_reports_unreachable_as_none() {
        let grid = Grid::parse("S#E").unwrap();
        let start = Pose::new(Point::new(0, 0), Direction::East);
        assert_eq!(analyze(&grid, start, Point::new(2, 0), TurnCosts::default()), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config: MazeConfig = serde_json::from_str(r#"{"start":"A"}"#).unwrap();
        assert_eq!(config.start, 'A');
        assert_eq!(config.costs, TurnCosts::default());
        assert_eq!(config.facing, Direction::East);
    }
}
