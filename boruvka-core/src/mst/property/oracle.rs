//! Sequential Kruskal oracle for MST property verification.
//!
//! A simple, trusted, sequential Kruskal used as a reference. Edges are
//! ordered by `(weight, input index)`, the same total order the parallel
//! scan uses to break ties, so both must select the very same edges.

use crate::Edge;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Accepted edges in acceptance order.
    pub edges: Vec<Edge>,
    /// Total weight of the spanning forest.
    pub total_weight: i64,
    /// Number of connected components after construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal's algorithm.
///
/// Self-loops and out-of-range edges are skipped so the oracle can also be
/// pointed at raw, unvalidated input.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[Edge]) -> SequentialMstResult {
    let mut order: Vec<usize> = (0..edges.len())
        .filter(|&index| is_usable(&edges[index], vertex_count))
        .collect();
    // Stable sort keeps input order among equal weights.
    order.sort_by_key(|&index| edges[index].weight());

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank: Vec<usize> = vec![0; vertex_count];
    let mut accepted = Vec::new();
    let mut total_weight = 0_i64;
    let mut components = vertex_count;

    for index in order {
        let edge = edges[index];
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.dest());
        if ra == rb {
            continue;
        }
        union_by_rank(&mut parent, &mut rank, ra, rb);
        accepted.push(edge);
        total_weight += i64::from(edge.weight());
        components -= 1;
    }

    SequentialMstResult {
        edges: accepted,
        total_weight,
        component_count: components,
    }
}

fn is_usable(edge: &Edge, vertex_count: usize) -> bool {
    edge.source() != edge.dest() && edge.source() < vertex_count && edge.dest() < vertex_count
}

/// Union by rank, breaking ties towards the smaller index.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let (root, child) = match rank[a].cmp(&rank[b]) {
        std::cmp::Ordering::Greater => (a, b),
        std::cmp::Ordering::Less => (b, a),
        std::cmp::Ordering::Equal => (a.min(b), a.max(b)),
    };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
