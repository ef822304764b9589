use crate::frontier::Frontier;
use crate::table::CostTable;
use crate::traits::StateSpace;

/// Compute the minimum cost from `start` to every reachable node.
///
/// Label-correcting (Dijkstra-style) search: edge costs may differ per
/// transition, so a node can be improved several times before it is final.
/// Costs must be non-negative.
pub fn cost_search<S: StateSpace>(space: &S, start: S::Node) -> CostTable<S::Node> {
    cost_search_from(space, &[start])
}

/// Multi-source variant of [`cost_search`]: every source starts at cost 0.
pub fn cost_search_from<S: StateSpace>(space: &S, sources: &[S::Node]) -> CostTable<S::Node> {
    let mut table = CostTable::new();
    let mut open = Frontier::new();

    for &src in sources {
        if table.improve(src, 0) {
            open.push(0, src);
        }
    }

    let mut buf = Vec::with_capacity(8);

    while let Some((cost, node)) = open.pop_min() {
        table.stats_mut().pops += 1;

        // Skip stale entries.
        if table.cost(node).is_some_and(|best| best < cost) {
            table.stats_mut().stale += 1;
            continue;
        }

        buf.clear();
        space.transitions(node, &mut buf);

        for &(next, delta) in buf.iter() {
            let candidate = cost.saturating_add(delta);
            if table.improve(next, candidate) {
                table.stats_mut().relaxations += 1;
                log::trace!("relax {next:?} -> {candidate}");
                open.push(candidate, next);
            }
        }
    }

    let stats = table.stats();
    log::debug!(
        "cost search reached {} nodes ({} pops, {} stale, {} relaxations)",
        table.len(),
        stats.pops,
        stats.stale,
        stats.relaxations
    );
    table
}
