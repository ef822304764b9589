//! Day 23: LAN Party.
//!
//! The input lists network links `a-b`. Part 1 counts the sets of three
//! interconnected computers where at least one name starts with `t`; part 2
//! is the password: the largest fully connected set, names sorted and joined
//! with commas.

use std::collections::HashMap;

use wayfind_search::clique::{Graph, maximum_clique, triangles};

use crate::{Answers, PuzzleError};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LanConfig {
    /// Name prefix of the computers part 1 looks for.
    pub prefix: String,
}

impl Default for LanConfig {
    fn default() -> Self {
        Self {
            prefix: "t".to_string(),
        }
    }
}

/// Link graph with computer names interned to vertex ids.
#[derive(Debug, Clone, Default)]
pub struct Network<'a> {
    pub graph: Graph,
    names: Vec<&'a str>,
    ids: HashMap<&'a str, usize>,
}

impl<'a> Network<'a> {
    pub fn parse(input: &'a str) -> Result<Self, PuzzleError> {
        let mut net = Network::default();
        for (i, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (a, b) = line
                .split_once('-')
                .filter(|(a, b)| !a.is_empty() && !b.is_empty())
                .ok_or_else(|| PuzzleError::invalid(i + 1, format!("expected `a-b`, got `{line}`")))?;
            let a = net.intern(a);
            let b = net.intern(b);
            net.graph.add_edge(a, b);
        }
        Ok(net)
    }

    fn intern(&mut self, name: &'a str) -> usize {
        *self.ids.entry(name).or_insert_with(|| {
            self.names.push(name);
            self.names.len() - 1
        })
    }

    pub fn name(&self, id: usize) -> &'a str {
        self.names[id]
    }

    /// Triangles with at least one computer named `prefix…`.
    pub fn triangles_with_prefix(&self, prefix: &str) -> usize {
        triangles(&self.graph)
            .into_iter()
            .filter(|t| t.iter().any(|&v| self.name(v).starts_with(prefix)))
            .count()
    }

    /// Names of a largest fully connected set, sorted and comma-joined.
    pub fn password(&self) -> String {
        let mut names: Vec<&str> = maximum_clique(&self.graph)
            .into_iter()
            .map(|v| self.name(v))
            .collect();
        names.sort_unstable();
        names.join(",")
    }
}

pub fn solve(input: &str) -> Result<Answers, PuzzleError> {
    solve_with(input, &LanConfig::default())
}

pub fn solve_with(input: &str, config: &LanConfig) -> Result<Answers, PuzzleError> {
    let net = Network::parse(input)?;
    let triples = net.triangles_with_prefix(&config.prefix);
    let password = net.password();
    log::debug!(
        "day 23: {} computers, {triples} triangles with '{}', password {password}",
        net.graph.len(),
        config.prefix
    );
    Ok(Answers::new(triples, password))
}
