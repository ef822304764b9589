//! Unit-cost distance fields.

use std::collections::VecDeque;

use wayfind_core::{Point, Range};

/// Sentinel value meaning "unreachable" in a [`DistanceField`].
pub const UNREACHABLE: u32 = u32::MAX;

/// Dense breadth-first distances over a rectangle, indexed by flat position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    bounds: Range,
    dist: Vec<u32>,
}

impl DistanceField {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step to a 4-neighbour inside `bounds` for which `passable`
    /// returns `true` has cost 1. Sources inside `bounds` start at 0 whether
    /// or not they are passable themselves.
    pub fn bfs(bounds: Range, sources: &[Point], passable: impl Fn(Point) -> bool) -> Self {
        let mut dist = vec![UNREACHABLE; bounds.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();

        for &src in sources {
            if let Some(si) = bounds.index_of(src) {
                if dist[si] != UNREACHABLE {
                    continue;
                }
                dist[si] = 0;
                queue.push_back(si);
            }
        }

        while let Some(ci) = queue.pop_front() {
            let current = dist[ci];
            let cp = bounds.point_at(ci);

            for np in cp.neighbors_4() {
                let Some(ni) = bounds.index_of(np) else {
                    continue;
                };
                if dist[ni] != UNREACHABLE || !passable(np) {
                    continue;
                }
                dist[ni] = current + 1;
                queue.push_back(ni);
            }
        }

        Self { bounds, dist }
    }

    /// The rectangle this field covers.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Distance to `p`, or `None` if outside the field or unreached.
    #[inline]
    pub fn at(&self, p: Point) -> Option<u32> {
        self.bounds
            .index_of(p)
            .map(|i| self.dist[i])
            .filter(|&d| d != UNREACHABLE)
    }

    /// Reached points with their distances, row-major.
    pub fn reached(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.bounds
            .iter()
            .zip(self.dist.iter().copied())
            .filter(|&(_, d)| d != UNREACHABLE)
    }

    /// Number of reached points.
    pub fn reached_count(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }
}
