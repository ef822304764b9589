//! Day 20: Race Condition.
//!
//! A racetrack has a single route from `S` to `E`. Once per race a program
//! may pass through walls for up to `n` picoseconds, jumping from one track
//! tile to another within Manhattan distance `n`. Each part counts the
//! cheats that save at least `min_saving` picoseconds.

use wayfind_core::{Grid, Point};
use wayfind_search::{DistanceField, WALL, diamond};

use crate::{Answers, PuzzleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RaceConfig {
    /// Longest cheat in part 1.
    pub short_cheat: i32,
    /// Longest cheat in part 2.
    pub long_cheat: i32,
    /// Smallest saving worth counting.
    pub min_saving: u32,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            short_cheat: 2,
            long_cheat: 20,
            min_saving: 100,
        }
    }
}

/// Distances to every track tile from both ends of the race.
#[derive(Debug, Clone)]
pub struct Racetrack {
    from_start: DistanceField,
    from_end: DistanceField,
    /// Time without cheating.
    pub normal: u32,
}

impl Racetrack {
    pub fn new(grid: &Grid<u8>, start: Point, end: Point) -> Result<Self, PuzzleError> {
        let open = |p: Point| grid.at(p).is_some_and(|&c| c != WALL);
        let from_start = DistanceField::bfs(grid.bounds(), &[start], open);
        let from_end = DistanceField::bfs(grid.bounds(), &[end], open);
        let normal = from_start.at(end).ok_or(PuzzleError::NoPath)?;
        Ok(Self {
            from_start,
            from_end,
            normal,
        })
    }

    /// Number of distinct cheats of length at most `max_len` that save at
    /// least `min_saving`. A cheat is identified by its start and end tiles.
    pub fn count_cheats(&self, max_len: i32, min_saving: u32) -> usize {
        let Some(budget) = self.normal.checked_sub(min_saving) else {
            return 0;
        };
        let jumps: Vec<(Point, u32)> = diamond(max_len)
            .map(|d| (d, d.norm1().unsigned_abs()))
            .collect();

        let mut count = 0;
        for (a, to_a) in self.from_start.reached() {
            for &(d, len) in &jumps {
                let Some(from_b) = self.from_end.at(a + d) else {
                    continue;
                };
                if to_a + len + from_b <= budget {
                    count += 1;
                }
            }
        }
        count
    }
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    solve_with(input, &RaceConfig::default())
}

pub fn solve_with(input: &str, config: &RaceConfig) -> Result<Answers, PuzzleError> {
    let grid = Grid::parse(input)?;
    let start = crate::locate(&grid, 'S')?;
    let end = crate::locate(&grid, 'E')?;
    let track = Racetrack::new(&grid, start, end)?;

    let short = track.count_cheats(config.short_cheat, config.min_saving);
    let long = track.count_cheats(config.long_cheat, config.min_saving);
    log::debug!(
        "day 20: normal time {}, {short} short and {long} long cheats save at least {}",
        track.normal,
        config.min_saving
    );
    Ok(Answers::new(short, long))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    fn track() -> Racetrack {
        let grid = Grid::parse(EXAMPLE).unwrap();
        let start = grid.locate('S').unwrap();
        let end = grid.locate('E').unwrap();
        Racetrack::new(&grid, start, end).unwrap()
    }

    #[test]
    fn normal_time() {
        assert_eq!(track().normal, 84);
    }

    #[test]
    fn short_cheats() {
        let t = track();
        assert_eq!(t.count_cheats(2, 64), 1);
        assert_eq!(t.count_cheats(2, 40), 2);
        assert_eq!(t.count_cheats(2, 20), 5);
        assert_eq!(t.count_cheats(2, 10), 10);
    }

    #[test]
    fn long_cheats() {
        let t = track();
        assert_eq!(t.count_cheats(20, 76), 3);
        assert_eq!(t.count_cheats(20, 74), 7);
        assert_eq!(t.count_cheats(20, 72), 29);
        assert_eq!(t.count_cheats(20, 50), 285);
    }

    #[test]
    fn solve_with_small_threshold() {
        let config = RaceConfig {
            min_saving: 50,
            ..RaceConfig::default()
        };
        assert_eq!(solve_with(EXAMPLE, &config), Ok(Answers::new(1, 285)));
    }

    #[test]
    fn nothing_saves_a_hundred_on_the_example() {
        assert_eq!(solve(EXAMPLE), Ok(Answers::new(0, 0)));
    }

    #[test]
    fn threshold_above_normal_time() {
        assert_eq!(track().count_cheats(20, 85), 0);
        let config = RaceConfig {
            min_saving: u32::MAX,
            ..RaceConfig::default()
        };
        assert_eq!(solve_with("S.E", &config), Ok(Answers::new(0, 0)));
    }

    #[test]
    fn disconnected_track() {
        assert_eq!(solve("S#E"), Err(PuzzleError::NoPath));
    }
}
