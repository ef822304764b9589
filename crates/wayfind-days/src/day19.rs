//! Day 19: Linen Layout.
//!
//! The first line lists towel patterns, and after a blank line each line is
//! a design. Part 1 counts the designs that some sequence of patterns
//! spells; part 2 sums the number of ways to spell each.

use wayfind_search::{Memo, Recurrence};

use crate::{Answers, PuzzleError};

/// Ways to spell the suffix of `design` starting at an offset.
struct Arrangements<'a> {
    design: &'a [u8],
    patterns: &'a [&'a [u8]],
}

impl Recurrence<usize, u64> for Arrangements<'_> {
    fn deps(&self, &at: &usize) -> Vec<usize> {
        let rest = &self.design[at..];
        self.patterns
            .iter()
            .filter(|&&p| rest.starts_with(p))
            .map(|p| at + p.len())
            .collect()
    }

    fn compute(&self, &at: &usize, deps: Vec<u64>) -> u64 {
        if at == self.design.len() { 1 } else { deps.iter().sum() }
    }
}

/// Towel patterns and designs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Onsen<'a> {
    pub patterns: Vec<&'a str>,
    pub designs: Vec<&'a str>,
}

impl<'a> Onsen<'a> {
    pub fn parse(input: &'a str) -> Result<Self, PuzzleError> {
        let mut lines = input.lines().map(str::trim);
        let first = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| PuzzleError::invalid(1, "missing towel patterns"))?;
        if lines.next().is_some_and(|l| !l.is_empty()) {
            return Err(PuzzleError::invalid(2, "expected a blank line after the patterns"));
        }

        let patterns = first
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        let designs = lines.filter(|l| !l.is_empty()).collect();
        Ok(Self { patterns, designs })
    }

    /// Number of ways to spell `design`.
    pub fn arrangements(&self, design: &str) -> u64 {
        let patterns: Vec<&[u8]> = self.patterns.iter().map(|p| p.as_bytes()).collect();
        let memo = Memo::new(Arrangements {
            design: design.as_bytes(),
            patterns: &patterns,
        });
        memo.get(&0usize)
    }
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    let onsen = Onsen::parse(input)?;
    let counts: Vec<u64> = onsen
        .designs
        .iter()
        .map(|d| onsen.arrangements(d))
        .collect();

    let possible = counts.iter().filter(|&&n| n > 0).count();
    let total: u64 = counts.iter().sum();
    log::debug!(
        "day 19: {possible} of {} designs possible from {} patterns",
        counts.len(),
        onsen.patterns.len()
    );
    Ok(Answers::new(possible, total))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    #[test]
    fn example() {
        assert_eq!(solve(EXAMPLE), Ok(Answers::new(6, 16)));
    }

    #[test]
    fn arrangements_per_design() {
        let onsen = Onsen::parse(EXAMPLE).unwrap();
        let counts: Vec<u64> = onsen.designs.iter().map(|d| onsen.arrangements(d)).collect();
        assert_eq!(counts, vec![2, 1, 4, 6, 0, 1, 2, 0]);
    }

    #[test]
    fn empty_patterns_are_ignored() {
        let onsen = Onsen::parse("a, , aa\n\naaa").unwrap();
        assert_eq!(onsen.patterns, vec!["a", "aa"]);
        assert_eq!(onsen.arrangements("aaa"), 3);
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(matches!(
            Onsen::parse("r, b\nrb\n"),
            Err(PuzzleError::InvalidFormat { line: 2, .. })
        ));
        assert!(matches!(
            Onsen::parse(""),
            Err(PuzzleError::InvalidFormat { line: 1, .. })
        ));
    }
}
