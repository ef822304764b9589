//! Cliques in small undirected graphs.

use std::collections::BTreeSet;

/// Undirected simple graph over dense vertex ids `0..len`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: Vec<BTreeSet<usize>>,
}

impl Graph {
    /// Graph with `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            adj: vec![BTreeSet::new(); n],
        }
    }

    /// Add the edge `a - b`, growing the vertex set as needed. Self-loops
    /// are ignored.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let needed = a.max(b) + 1;
        if self.adj.len() < needed {
            self.adj.resize(needed, BTreeSet::new());
        }
        self.adj[a].insert(b);
        self.adj[b].insert(a);
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> &BTreeSet<usize> {
        &self.adj[v]
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    #[inline]
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.adj.get(a).is_some_and(|n| n.contains(&b))
    }
}

/// Every triangle `[a, b, c]` with `a < b < c`, each listed once, sorted.
pub fn triangles(g: &Graph) -> Vec<[usize; 3]> {
    let mut out = Vec::new();
    for a in 0..g.len() {
        for &b in g.neighbors(a).range(a + 1..) {
            for &c in g.neighbors(b).range(b + 1..) {
                if g.is_adjacent(a, c) {
                    out.push([a, b, c]);
                }
            }
        }
    }
    out
}

/// A maximum clique, vertices ascending.
///
/// Bron–Kerbosch with pivoting: the pivot is the vertex of `P ∪ X` with the
/// most neighbours in `P`, and branches that cannot beat the best clique
/// found so far are cut.
pub fn maximum_clique(g: &Graph) -> Vec<usize> {
    let mut best = Vec::new();
    let mut r = Vec::new();
    let p: BTreeSet<usize> = (0..g.len()).collect();
    bron_kerbosch(g, &mut r, p, BTreeSet::new(), &mut best);
    best.sort_unstable();
    log::debug!("maximum clique has {} vertices", best.len());
    best
}

fn bron_kerbosch(
    g: &Graph,
    r: &mut Vec<usize>,
    mut p: BTreeSet<usize>,
    mut x: BTreeSet<usize>,
    best: &mut Vec<usize>,
) {
    if p.is_empty() {
        if x.is_empty() && r.len() > best.len() {
            best.clone_from(r);
        }
        return;
    }
    if r.len() + p.len() <= best.len() {
        return;
    }

    let pivot = p
        .iter()
        .chain(x.iter())
        .copied()
        .max_by_key(|&u| p.intersection(g.neighbors(u)).count());
    let candidates: Vec<usize> = match pivot {
        Some(u) => p.difference(g.neighbors(u)).copied().collect(),
        None => p.iter().copied().collect(),
    };

    for v in candidates {
        let nv = g.neighbors(v);
        let p_next = p.intersection(nv).copied().collect();
        let x_next = x.intersection(nv).copied().collect();
        r.push(v);
        bron_kerbosch(g, r, p_next, x_next, best);
        r.pop();
        p.remove(&v);
        x.insert(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn graph(edges: &[(usize, usize)]) -> Graph {
        let mut g = Graph::default();
        for &(a, b) in edges {
            g.add_edge(a, b);
        }
        g
    }

    #[test]
    fn add_edge_grows_and_ignores_loops() {
        let mut g = Graph::with_vertices(2);
        g.add_edge(0, 4);
        g.add_edge(3, 3);
        assert_eq!(g.len(), 5);
        assert!(g.is_adjacent(4, 0));
        assert_eq!(g.degree(3), 0);
        assert!(!g.is_adjacent(7, 0));
    }

    #[test]
    fn triangles_listed_once() {
        // K4 on 0..4 plus a pendant 4.
        let g = graph(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (3, 4)]);
        assert_eq!(
            triangles(&g),
            vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]
        );
    }

    #[test]
    fn maximum_clique_finds_k4() {
        let g = graph(&[
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 3),
            (3, 4),
            (3, 5),
            (3, 6),
            (4, 5),
            (4, 6),
            (5, 6),
        ]);
        assert_eq!(maximum_clique(&g), vec![3, 4, 5, 6]);
    }

    #[test]
    fn empty_and_edgeless_graphs() {
        assert!(maximum_clique(&Graph::default()).is_empty());
        assert_eq!(maximum_clique(&Graph::with_vertices(3)).len(), 1);
    }

    fn is_clique(g: &Graph, vs: &[usize]) -> bool {
        vs.iter()
            .enumerate()
            .all(|(i, &a)| vs[i + 1..].iter().all(|&b| g.is_adjacent(a, b)))
    }

    proptest! {
        #[test]
        fn result_is_a_clique_no_smaller_than_any_triangle(
            edges in prop::collection::vec((0usize..12, 0usize..12), 0..40)
        ) {
            let g = graph(&edges);
            let clique = maximum_clique(&g);
            prop_assert!(is_clique(&g, &clique));
            if !triangles(&g).is_empty() {
                prop_assert!(clique.len() >= 3);
            }
            for v in 0..g.len() {
                if g.degree(v) > 0 {
                    prop_assert!(clique.len() >= 2);
                }
            }
        }
    }
}
