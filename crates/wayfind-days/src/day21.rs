//! Day 21: Keypad Conundrum.
//!
//! A door code is typed on a numeric keypad by a robot, which is steered
//! from a directional keypad by another robot, and so on up to the
//! directional keypad under your own fingers. Robot arms never pass over a
//! keypad's gap. The complexity of a code is the length of the shortest
//! sequence you press times the code's numeric value; part 1 has two
//! intermediate robots, part 2 has twenty-five.

use std::iter;

use wayfind_core::{Grid, Point};
use wayfind_search::{Memo, Recurrence};

use crate::{Answers, PuzzleError};

const GAP: u8 = b'#';
const ACTIVATE: u8 = b'A';

const NUMERIC_ROWS: [&[u8; 3]; 4] = [b"789", b"456", b"123", b"#0A"];
const DIRECTIONAL_ROWS: [&[u8; 3]; 2] = [b"#^A", b"<v>"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeypadConfig {
    /// Robots on directional keypads in part 1.
    pub short_chain: u32,
    /// Robots on directional keypads in part 2.
    pub long_chain: u32,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            short_chain: 2,
            long_chain: 25,
        }
    }
}

/// A keypad layout with a gap the arm must avoid.
#[derive(Debug, Clone)]
pub struct Keypad {
    keys: Grid<u8>,
}

impl Keypad {
    pub fn numeric() -> Self {
        Self {
            keys: Grid::from_fn(3, 4, |p| NUMERIC_ROWS[p.y as usize][p.x as usize]),
        }
    }

    pub fn directional() -> Self {
        Self {
            keys: Grid::from_fn(3, 2, |p| DIRECTIONAL_ROWS[p.y as usize][p.x as usize]),
        }
    }

    pub fn has_key(&self, key: u8) -> bool {
        key != GAP && self.keys.find(&key).is_some()
    }

    /// Candidate presses on the controlling keypad that move the arm from
    /// `from` to `to` and press it: all horizontal moves then all vertical,
    /// or the reverse, skipping an order whose corner is the gap. Mixing the
    /// two directions more often is never shorter one level up.
    pub fn routes(&self, from: u8, to: u8) -> Vec<Vec<u8>> {
        let (Some(a), Some(b)) = (self.keys.find(&from), self.keys.find(&to)) else {
            return Vec::new();
        };
        let d = b - a;
        let horizontal = iter::repeat_n(if d.x < 0 { b'<' } else { b'>' }, d.x.unsigned_abs() as usize);
        let vertical = iter::repeat_n(if d.y < 0 { b'^' } else { b'v' }, d.y.unsigned_abs() as usize);

        let mut out: Vec<Vec<u8>> = Vec::with_capacity(2);
        if self.keys.at(Point::new(b.x, a.y)) != Some(&GAP) {
            out.push(
                horizontal
                    .clone()
                    .chain(vertical.clone())
                    .chain(iter::once(ACTIVATE))
                    .collect(),
            );
        }
        if self.keys.at(Point::new(a.x, b.y)) != Some(&GAP) {
            let route: Vec<u8> = vertical.chain(horizontal).chain(iter::once(ACTIVATE)).collect();
            if !out.contains(&route) {
                out.push(route);
            }
        }
        out
    }
}

/// Consecutive key pairs of a sequence, starting with the arm on `A`.
fn strokes(keys: &[u8]) -> impl Iterator<Item = (u8, u8)> + '_ {
    iter::once(ACTIVATE).chain(keys.iter().copied()).zip(keys.iter().copied())
}

/// Presses you make so that the arm over a directional keypad moves from
/// one key to another and presses it, with `depth` robots between that
/// keypad and yours. At depth 0 the keypad is yours and every key is one
/// press. `None` when the count outgrows `u64`.
struct Presses {
    pad: Keypad,
}

impl Recurrence<(u8, u8, u32), Option<u64>> for Presses {
    fn deps(&self, &(from, to, depth): &(u8, u8, u32)) -> Vec<(u8, u8, u32)> {
        if depth == 0 {
            return Vec::new();
        }
        self.pad
            .routes(from, to)
            .iter()
            .flat_map(|route| strokes(route).map(|(a, b)| (a, b, depth - 1)).collect::<Vec<_>>())
            .collect()
    }

    fn compute(&self, &(from, to, depth): &(u8, u8, u32), deps: Vec<Option<u64>>) -> Option<u64> {
        if depth == 0 {
            return Some(1);
        }
        let mut rest = deps.as_slice();
        let mut best: Option<u64> = None;
        for route in self.pad.routes(from, to) {
            let (head, tail) = rest.split_at_checked(route.len())?;
            rest = tail;
            if let Some(cost) = head.iter().try_fold(0u64, |sum, &n| sum.checked_add(n?)) {
                best = Some(best.map_or(cost, |b| b.min(cost)));
            }
        }
        best
    }
}

/// The keypad chain, with press counts cached across codes.
pub struct Chain {
    numeric: Keypad,
    presses: Memo<(u8, u8, u32), Option<u64>, Presses>,
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl Chain {
    pub fn new() -> Self {
        Self {
            numeric: Keypad::numeric(),
            presses: Memo::new(Presses {
                pad: Keypad::directional(),
            }),
        }
    }

    /// Fewest presses on your keypad to type `code`, with `robots` robots
    /// on directional keypads between yours and the numeric keypad.
    pub fn shortest(&self, code: &[u8], robots: u32) -> Result<u64, PuzzleError> {
        let overflow = || PuzzleError::Overflow(format!("presses for {robots} robots"));
        strokes(code).try_fold(0u64, |total, (from, to)| {
            let best = self
                .numeric
                .routes(from, to)
                .iter()
                .filter_map(|route| {
                    strokes(route).try_fold(0u64, |sum, (a, b)| {
                        sum.checked_add(self.presses.get(&(a, b, robots))?)
                    })
                })
                .min()
                .ok_or_else(overflow)?;
            total.checked_add(best).ok_or_else(overflow)
        })
    }

    /// Shortest length times the numeric part of `code`.
    pub fn complexity(&self, code: &str, robots: u32) -> Result<u64, PuzzleError> {
        let presses = self.shortest(code.as_bytes(), robots)?;
        numeric_value(code)
            .and_then(|n| presses.checked_mul(n))
            .ok_or_else(|| PuzzleError::Overflow(format!("complexity of {code}")))
    }
}

fn numeric_value(code: &str) -> Option<u64> {
    code.bytes()
        .filter(u8::is_ascii_digit)
        .try_fold(0u64, |n, d| n.checked_mul(10)?.checked_add(u64::from(d - b'0')))
}

/// One code per line, every character a numeric keypad key.
pub fn parse_codes(input: &str) -> Result<Vec<&str>, PuzzleError> {
    let pad = Keypad::numeric();
    let mut codes = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(c) = line.bytes().find(|&b| !pad.has_key(b)) {
            return Err(PuzzleError::invalid(
                i + 1,
                format!("`{}` is not a numeric keypad key", c as char),
            ));
        }
        codes.push(line);
    }
    Ok(codes)
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    solve_with(input, &KeypadConfig::default())
}

pub fn solve_with(input: &str, config: &KeypadConfig) -> Result<Answers, PuzzleError> {
    let codes = parse_codes(input)?;
    let chain = Chain::new();
    let total = |robots: u32| -> Result<u64, PuzzleError> {
        codes.iter().try_fold(0u64, |sum, code| {
            sum.checked_add(chain.complexity(code, robots)?)
                .ok_or_else(|| PuzzleError::Overflow(format!("complexity sum for {robots} robots")))
        })
    };

    let short = total(config.short_chain)?;
    let long = total(config.long_chain)?;
    log::debug!(
        "day 21: {} codes, complexity {short} with {} robots and {long} with {}",
        codes.len(),
        config.short_chain,
        config.long_chain
    );
    Ok(Answers::new(short, long))
}
