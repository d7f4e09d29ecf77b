//! Parallel search for each component's cheapest outgoing edge.
//!
//! A fixed number of scoped worker threads scan the edge list, resolve both
//! endpoints through the shared [`DisjointSet`], and propose every crossing
//! edge to the table slots of both endpoint components. The scan returns only
//! after every worker has been joined.

use std::{
    num::NonZeroUsize,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    thread,
};

use tracing::trace;

use crate::{
    builder::ScanStrategy,
    error::BoruvkaError,
    graph::{Edge, Graph, VertexId},
};

use super::union_find::DisjointSet;

const NO_EDGE: u64 = u64::MAX;
const INDEX_MASK: u64 = 0xFFFF_FFFF;
const SIGN_FLIP: u32 = 0x8000_0000;

/// Cheapest crossing edge seen so far per component representative.
///
/// Each slot packs `(weight, edge index)` into one `u64` whose unsigned order
/// matches `(weight, index)` order, so an improving proposal is a single
/// `fetch_min`. Both endpoint updates of a proposal are independent: each slot
/// only ever decreases, so no concurrent proposal can be lost.
pub(crate) struct CheapestEdgeTable {
    slots: Vec<AtomicU64>,
}

impl CheapestEdgeTable {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            slots: (0..vertex_count).map(|_| AtomicU64::new(NO_EDGE)).collect(),
        }
    }

    fn propose(&self, component: VertexId, key: u64) {
        self.slots[component].fetch_min(key, Ordering::AcqRel);
    }

    /// Returns `(component, edge index)` pairs in increasing component order,
    /// skipping components that saw no crossing edge.
    pub(crate) fn proposals(&self) -> impl Iterator<Item = (VertexId, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(component, slot)| {
                let key = slot.load(Ordering::Acquire);
                (key != NO_EDGE).then(|| (component, unpack_index(key)))
            })
    }
}

fn pack(weight: i32, index: u32) -> u64 {
    let ordered_weight = weight.cast_unsigned() ^ SIGN_FLIP;
    (u64::from(ordered_weight) << 32) | u64::from(index)
}

fn unpack_index(key: u64) -> usize {
    // Masked to 32 bits, so the conversion is lossless on every target with
    // at least 32-bit pointers.
    usize::try_from(key & INDEX_MASK).unwrap_or(usize::MAX)
}

/// Runs one round's closest-edge scan on `workers` fresh threads.
///
/// # Errors
/// Returns [`BoruvkaError::WorkerSpawn`] when a thread cannot be started and
/// [`BoruvkaError::WorkerPanicked`] when a worker does not finish its scan.
pub(crate) fn find_cheapest_edges(
    graph: &Graph,
    components: &DisjointSet,
    workers: NonZeroUsize,
    strategy: ScanStrategy,
) -> Result<CheapestEdgeTable, BoruvkaError> {
    let table = CheapestEdgeTable::new(graph.vertex_count());
    let worker_count = workers.get();

    thread::scope(|scope| {
        let handles = (0..worker_count)
            .map(|worker| {
                let table = &table;
                thread::Builder::new()
                    .name(format!("boruvka-worker-{worker}"))
                    .spawn_scoped(scope, move || {
                        run_worker(worker, worker_count, strategy, graph, components, table)
                    })
                    .map_err(|source| BoruvkaError::WorkerSpawn {
                        worker,
                        source: Arc::new(source),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Join every handle before reporting, so a second panicking worker
        // cannot escape the scope.
        let mut first_panicked = None;
        for (worker, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(proposals) => trace!(worker, proposals, "worker finished scan"),
                Err(_) => {
                    first_panicked.get_or_insert(worker);
                }
            }
        }
        first_panicked.map_or(Ok(()), |worker| {
            Err(BoruvkaError::WorkerPanicked { worker })
        })
    })?;

    Ok(table)
}

fn run_worker(
    worker: usize,
    worker_count: usize,
    strategy: ScanStrategy,
    graph: &Graph,
    components: &DisjointSet,
    table: &CheapestEdgeTable,
) -> usize {
    match strategy {
        ScanStrategy::VertexOwnership => {
            scan_owned_vertices(worker, worker_count, graph, components, table)
        }
        ScanStrategy::EdgePartition => {
            scan_edge_partition(worker, worker_count, graph.edges(), components, table)
        }
    }
}

/// Worker `t` owns vertices `{t, t + T, t + 2T, ...}` and rescans the whole
/// edge list once per owned vertex.
fn scan_owned_vertices(
    worker: usize,
    worker_count: usize,
    graph: &Graph,
    components: &DisjointSet,
    table: &CheapestEdgeTable,
) -> usize {
    (worker..graph.vertex_count())
        .step_by(worker_count)
        .map(|_| propose_crossing_edges(graph.edges(), 0, components, table))
        .sum()
}

/// Worker `t` scans the `t`-th contiguous slice of the edge list once.
fn scan_edge_partition(
    worker: usize,
    worker_count: usize,
    edges: &[Edge],
    components: &DisjointSet,
    table: &CheapestEdgeTable,
) -> usize {
    let chunk = edges.len().div_ceil(worker_count).max(1);
    let start = worker.saturating_mul(chunk).min(edges.len());
    let end = start.saturating_add(chunk).min(edges.len());
    edges
        .get(start..end)
        .map_or(0, |slice| propose_crossing_edges(slice, start, components, table))
}

/// Proposes every edge of `edges` whose endpoints lie in different
/// components. `first_index` is the position of `edges[0]` in the full list.
fn propose_crossing_edges(
    edges: &[Edge],
    first_index: usize,
    components: &DisjointSet,
    table: &CheapestEdgeTable,
) -> usize {
    let mut proposals = 0;
    for (offset, edge) in edges.iter().enumerate() {
        let set1 = components.find(edge.source());
        let set2 = components.find(edge.dest());
        if set1 == set2 {
            continue;
        }

        // `Graph` caps the edge count at `u32::MAX`, so every index fits.
        let Ok(index) = u32::try_from(first_index.saturating_add(offset)) else {
            continue;
        };
        let key = pack(edge.weight(), index);
        table.propose(set1, key);
        table.propose(set2, key);
        proposals += 1;
    }
    proposals
}
