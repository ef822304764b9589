//! Day 10: Hoof It.
//!
//! A hiking trail climbs exactly one unit of height per step. Part 1 sums,
//! over every trailhead, the number of peaks it can reach; part 2 sums the
//! number of distinct trails.

use wayfind_core::{Grid, GridError, Point};
use wayfind_search::{Cost, Memo, Recurrence, StateSpace, cost_search};

use crate::{Answers, PuzzleError};

/// Height of a cell marked `.`, never part of a trail.
pub const NO_HEIGHT: u8 = u8::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrailConfig {
    /// Height of a trailhead.
    pub base: u8,
    /// Height of a peak.
    pub peak: u8,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self { base: 0, peak: 9 }
    }
}

/// Parse the height map. Digits are heights, `.` is impassable.
pub fn parse_heights(input: &str) -> Result<Grid<u8>, GridError> {
    Grid::parse_with(input, |pos, b| match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'.' => Ok(NO_HEIGHT),
        _ => Err(GridError::InvalidCell {
            pos,
            found: b as char,
        }),
    })
}

/// Unit-cost moves to a neighbour exactly one unit higher.
struct Uphill<'g> {
    heights: &'g Grid<u8>,
}

impl Uphill<'_> {
    fn climbs(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        let next = self
            .heights
            .at(p)
            .and_then(|&h| h.checked_add(1))
            .filter(|&h| h != NO_HEIGHT);
        p.neighbors_4()
            .into_iter()
            .filter(move |&n| next.is_some() && self.heights.at(n).copied() == next)
    }
}

impl StateSpace for Uphill<'_> {
    type Node = Point;

    fn transitions(&self, node: Point, out: &mut Vec<(Point, Cost)>) {
        out.extend(self.climbs(node).map(|n| (n, 1)));
    }
}

/// Number of distinct trails from a cell to any peak.
struct Rating<'g> {
    uphill: Uphill<'g>,
    peak: u8,
}

impl Rating<'_> {
    fn is_peak(&self, p: Point) -> bool {
        self.uphill.heights.at(p) == Some(&self.peak)
    }
}

impl Recurrence<Point, u64> for Rating<'_> {
    fn deps(&self, p: &Point) -> Vec<Point> {
        if self.is_peak(*p) {
            Vec::new()
        } else {
            self.uphill.climbs(*p).collect()
        }
    }

    fn compute(&self, p: &Point, deps: Vec<u64>) -> u64 {
        if self.is_peak(*p) { 1 } else { deps.iter().sum() }
    }
}

/// Number of peaks reachable from `head`.
pub fn score(heights: &Grid<u8>, head: Point, peak: u8) -> usize {
    let table = cost_search(&Uphill { heights }, head);
    table
        .iter()
        .filter(|&(p, _)| heights.at(p) == Some(&peak))
        .count()
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    solve_with(input, &TrailConfig::default())
}

pub fn solve_with(input: &str, config: &TrailConfig) -> Result<Answers, PuzzleError> {
    let heights = parse_heights(input)?;
    let heads: Vec<Point> = heights.positions(|&h| h == config.base).collect();

    let total_score: usize = heads
        .iter()
        .map(|&head| score(&heights, head, config.peak))
        .sum();

    let ratings = Memo::new(Rating {
        uphill: Uphill { heights: &heights },
        peak: config.peak,
    });
    let total_rating: u64 = heads.iter().map(|head| ratings.get(head)).sum();

    log::debug!(
        "day 10: {} trailheads, score {total_score}, rating {total_rating}",
        heads.len()
    );
    Ok(Answers::new(total_score, total_rating))
}
