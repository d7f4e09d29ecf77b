//! CPU minimum spanning tree construction with parallel Boruvka rounds.
//!
//! Each round, scoped worker threads find every component's cheapest
//! outgoing edge (see [`finder`]); once they are all joined, the controller
//! contracts those edges one by one through the disjoint-set forest. Unions
//! only happen on this single thread.

mod finder;
mod union_find;

use std::num::NonZeroUsize;

use tracing::{debug, instrument};

use crate::{
    builder::ScanStrategy,
    error::BoruvkaError,
    graph::{Edge, Graph},
    result::MinimumSpanningTree,
};

use self::{
    finder::{CheapestEdgeTable, find_cheapest_edges},
    union_find::DisjointSet,
};

/// Running totals of the tree being assembled.
struct TreeBuilder {
    edges: Vec<Edge>,
    total_weight: i64,
}

/// Outcome of contracting one round's table.
#[derive(Debug, Default, Eq, PartialEq)]
struct RoundOutcome {
    contracted: usize,
    stale: usize,
}

/// Computes the minimum spanning tree of `graph` with Boruvka's algorithm.
///
/// # Errors
/// Returns [`BoruvkaError::DisconnectedGraph`] when a round makes no progress
/// while several components remain, and propagates worker failures from the
/// scan.
#[instrument(
    name = "core.boruvka",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edges().len()),
)]
pub(crate) fn boruvka_mst(
    graph: &Graph,
    workers: NonZeroUsize,
    strategy: ScanStrategy,
) -> Result<MinimumSpanningTree, BoruvkaError> {
    let mut components = DisjointSet::new(graph.vertex_count());
    let mut tree = TreeBuilder {
        edges: Vec::with_capacity(graph.vertex_count().saturating_sub(1)),
        total_weight: 0,
    };
    let mut rounds = 0_usize;

    while components.components() > 1 {
        let remaining = components.components();
        let table = find_cheapest_edges(graph, &components, workers, strategy)?;
        rounds = rounds.saturating_add(1);

        let outcome = contract_round(graph, &table, &mut components, &mut tree)?;
        debug!(
            round = rounds,
            contracted = outcome.contracted,
            stale = outcome.stale,
            components = components.components(),
            "round completed"
        );
        record_round_metrics(&outcome);

        if outcome.contracted == 0 {
            return Err(BoruvkaError::DisconnectedGraph {
                components: remaining,
            });
        }
    }

    debug_assert_eq!(
        tree.edges.len(),
        graph.vertex_count().saturating_sub(1),
        "a spanning tree has one edge fewer than it has vertices"
    );
    Ok(MinimumSpanningTree::new(
        tree.edges,
        tree.total_weight,
        rounds,
    ))
}

/// Contracts the table's proposals in increasing component order.
///
/// Endpoints are re-resolved for every proposal because earlier contractions
/// in the same scan may already have joined both sides.
fn contract_round(
    graph: &Graph,
    table: &CheapestEdgeTable,
    components: &mut DisjointSet,
    tree: &mut TreeBuilder,
) -> Result<RoundOutcome, BoruvkaError> {
    let mut outcome = RoundOutcome::default();
    for (_component, edge_index) in table.proposals() {
        let edge = *graph
            .edge(edge_index)
            .ok_or(BoruvkaError::InvariantViolation {
                invariant: "proposed edge index must address the edge list",
                index: edge_index,
            })?;

        let set1 = components.find(edge.source());
        let set2 = components.find(edge.dest());
        if set1 == set2 {
            outcome.stale += 1;
            continue;
        }

        components.union(set1, set2);
        tree.edges.push(edge);
        tree.total_weight = tree.total_weight.saturating_add(i64::from(edge.weight()));
        outcome.contracted += 1;
    }
    Ok(outcome)
}

#[cfg(feature = "metrics")]
fn record_round_metrics(outcome: &RoundOutcome) {
    metrics::counter!("boruvka_rounds_total").increment(1);
    metrics::counter!("boruvka_contractions_total").increment(outcome.contracted as u64);
    metrics::counter!("boruvka_stale_proposals_total").increment(outcome.stale as u64);
}

#[cfg(not(feature = "metrics"))]
const fn record_round_metrics(_outcome: &RoundOutcome) {}

#[cfg(test)]
mod property;
