//! Day 11: Plutonian Pebbles.
//!
//! Every blink, each stone changes independently: `0` becomes `1`, a number
//! with an even count of digits splits into its two halves, and anything
//! else is multiplied by 2024. The answers are stone counts after a number
//! of blinks, so the count is memoized per `(stone, blinks)`.

use wayfind_search::{Memo, Recurrence};

use crate::{Answers, PuzzleError};

/// Number engraved on a stone. Multiplying by 2024 can push a `u64` stone
/// past `u64::MAX`.
pub type Stone = u128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StonesConfig {
    pub short_blinks: u32,
    pub long_blinks: u32,
}

impl Default for StonesConfig {
    fn default() -> Self {
        Self {
            short_blinks: 25,
            long_blinks: 75,
        }
    }
}

/// Stones that `stone` turns into after one blink.
pub fn blink(stone: Stone) -> Result<Vec<Stone>, PuzzleError> {
    if stone == 0 {
        return Ok(vec![1]);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = Stone::pow(10, digits / 2);
        Ok(vec![stone / half, stone % half])
    } else {
        stone
            .checked_mul(2024)
            .map(|s| vec![s])
            .ok_or_else(|| PuzzleError::Overflow(format!("stone {stone} times 2024")))
    }
}

/// Stones descending from one stone after some blinks.
struct Descendants;

impl Recurrence<(Stone, u32), Result<u64, PuzzleError>> for Descendants {
    fn deps(&self, &(stone, blinks): &(Stone, u32)) -> Vec<(Stone, u32)> {
        match blink(stone) {
            Ok(next) if blinks > 0 => next.into_iter().map(|s| (s, blinks - 1)).collect(),
            _ => Vec::new(),
        }
    }

    fn compute(
        &self,
        &(stone, blinks): &(Stone, u32),
        deps: Vec<Result<u64, PuzzleError>>,
    ) -> Result<u64, PuzzleError> {
        if blinks == 0 {
            return Ok(1);
        }
        blink(stone)?;
        deps.into_iter().try_fold(0u64, |total, n| {
            total
                .checked_add(n?)
                .ok_or_else(|| PuzzleError::Overflow(format!("stone count after {blinks} blinks")))
        })
    }
}

pub fn parse_stones(input: &str) -> Result<Vec<Stone>, PuzzleError> {
    input
        .split_whitespace()
        .map(|tok| {
            tok.parse()
                .map_err(|_| PuzzleError::invalid(1, format!("`{tok}` is not a stone number")))
        })
        .collect()
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    solve_with(input, &StonesConfig::default())
}

pub fn solve_with(input: &str, config: &StonesConfig) -> Result<Answers, PuzzleError> {
    let stones = parse_stones(input)?;
    let memo = Memo::new(Descendants);
    let count = |blinks: u32| -> Result<u64, PuzzleError> {
        stones.iter().try_fold(0u64, |total, &s| {
            total
                .checked_add(memo.get(&(s, blinks))?)
                .ok_or_else(|| PuzzleError::Overflow(format!("stone count after {blinks} blinks")))
        })
    };

    let short = count(config.short_blinks)?;
    let long = count(config.long_blinks)?;
    log::debug!(
        "day 11: {} stones become {short} then {long}; {} states cached",
        stones.len(),
        memo.len()
    );
    Ok(Answers::new(short, long))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blink_rules() {
        assert_eq!(blink(0), Ok(vec![1]));
        assert_eq!(blink(1), Ok(vec![2024]));
        assert_eq!(blink(10), Ok(vec![1, 0]));
        assert_eq!(blink(99), Ok(vec![9, 9]));
        assert_eq!(blink(999), Ok(vec![2021976]));
        assert_eq!(blink(1000), Ok(vec![10, 0]));
    }

    #[test]
    fn blink_grows_past_u64() {
        assert_eq!(
            blink(1_000_000_000_000_000_001),
            Ok(vec![2_024_000_000_000_000_002_024])
        );
        let answers = solve_with(
            "1000000000000000001",
            &StonesConfig {
                short_blinks: 1,
                long_blinks: 2,
            },
        );
        assert_eq!(answers, Ok(Answers::new(1, 2)));
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(matches!(blink(Stone::MAX), Err(PuzzleError::Overflow(_))));
        let config = StonesConfig {
            short_blinks: 0,
            long_blinks: 1,
        };
        assert!(matches!(
            solve_with(&Stone::MAX.to_string(), &config),
            Err(PuzzleError::Overflow(_))
        ));
    }

    #[test]
    fn single_blink_example() {
        let config = StonesConfig {
            short_blinks: 1,
            long_blinks: 6,
        };
        assert_eq!(solve_with("0 1 10 99 999", &config).unwrap().part1, "7");
        let config = StonesConfig {
            short_blinks: 6,
            long_blinks: 25,
        };
        assert_eq!(solve_with("125 17", &config), Ok(Answers::new(22, 55312)));
    }

    #[test]
    fn example_with_default_blinks() {
        let answers = solve("125 17\n").unwrap();
        assert_eq!(answers.part1, "55312");
        assert_eq!(answers.part2, "65601038650482");
    }

    #[test]
    fn rejects_non_numbers() {
        assert!(matches!(
            solve("1 two 3"),
            Err(PuzzleError::InvalidFormat { line: 1, .. })
        ));
    }

    fn simulate(stones: &[Stone], blinks: u32) -> usize {
        let mut row = stones.to_vec();
        for _ in 0..blinks {
            row = row.into_iter().flat_map(|s| blink(s).unwrap()).collect();
        }
        row.len()
    }

    proptest! {
        #[test]
        fn memoized_count_matches_simulation(
            stones in prop::collection::vec(0u128..100_000, 0..4),
            blinks in 0u32..12,
        ) {
            let memo = Memo::new(Descendants);
            let counted: u64 = stones
                .iter()
                .map(|&s| memo.get(&(s, blinks)).unwrap())
                .sum();
            prop_assert_eq!(counted as usize, simulate(&stones, blinks));
        }
    }
}
