//! Strategy builders for MST property-based tests.
//!
//! Each generator produces a list of [`Edge`]s for a randomly sized graph.
//! Every distribution except `Disconnected` first lays down a random
//! spanning backbone, so its fixtures are connected.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs, keeping the quadratic edge count
/// (and the `V * E` vertex-ownership scan) small.
const DENSE_MAX_VERTICES: usize = 24;
/// Weight range for continuous distributions.
const WEIGHT_RANGE: std::ops::Range<i32> = -1_000..1_000;

/// Generates MST fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => generate_unique(rng),
        WeightDistribution::ManyIdentical => generate_identical(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::SignedExtremes => generate_signed_extremes(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

// ── Connected distributions ─────────────────────────────────────────────

/// Distinct weights: the MST is unique regardless of tie-breaking.
fn generate_unique(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pairs = connected_pairs(vertex_count, rng.gen_range(0.1..=0.4), rng);
    let weight_count = i32::try_from(pairs.len()).unwrap_or(i32::MAX);
    let mut weights: Vec<i32> = (0..weight_count).map(|w| w * 3 - 500).collect();
    weights.shuffle(rng);
    let edges = pairs
        .into_iter()
        .zip(weights)
        .map(|((source, dest), weight)| Edge::new(source, dest, weight))
        .collect();
    (vertex_count, edges)
}

/// Draws every weight from a pool of one to three values.
fn generate_identical(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool: Vec<i32> = (0..rng.gen_range(1..=3))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let pairs = connected_pairs(vertex_count, rng.gen_range(0.2..=0.5), rng);
    let edges = pairs
        .into_iter()
        .map(|(source, dest)| {
            let weight = pool[rng.gen_range(0..pool.len())];
            Edge::new(source, dest, weight)
        })
        .collect();
    (vertex_count, edges)
}

/// Backbone plus a handful of random extra edges, duplicates allowed.
fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut pairs = backbone(vertex_count, rng);
    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let dest = rng.gen_range(0..vertex_count);
        if source != dest {
            pairs.push((source, dest));
        }
    }
    (vertex_count, with_random_weights(pairs, rng))
}

fn generate_dense(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let pairs = connected_pairs(vertex_count, rng.gen_range(0.7..=0.95), rng);
    (vertex_count, with_random_weights(pairs, rng))
}

/// Mixes `i32::MIN`, `i32::MAX`, and ordinary signed weights.
fn generate_signed_extremes(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pairs = connected_pairs(vertex_count, rng.gen_range(0.1..=0.3), rng);
    let edges = pairs
        .into_iter()
        .map(|(source, dest)| {
            let weight = match rng.gen_range(0..4) {
                0 => i32::MIN,
                1 => i32::MAX,
                _ => rng.gen_range(WEIGHT_RANGE),
            };
            Edge::new(source, dest, weight)
        })
        .collect();
    (vertex_count, edges)
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Two to five islands, each internally random, with no bridges. Island
/// vertex ids are interleaved so components do not align with id ranges.
fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<Edge>) {
    let island_count = rng.gen_range(2..=5);
    let sizes: Vec<usize> = (0..island_count).map(|_| rng.gen_range(1..=10)).collect();
    let vertex_count: usize = sizes.iter().sum();
    let mut ids: Vec<usize> = (0..vertex_count).collect();
    ids.shuffle(rng);

    let mut pairs = Vec::new();
    let mut offset = 0;
    for size in sizes {
        let island = &ids[offset..offset + size];
        for (source, dest) in connected_pairs(size, rng.gen_range(0.2..=0.6), rng) {
            pairs.push((island[source], island[dest]));
        }
        offset += size;
    }
    (vertex_count, with_random_weights(pairs, rng))
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Random spanning tree over `0..vertex_count`: each vertex in a shuffled
/// order attaches to a random earlier one. Endpoint order is randomised.
fn backbone(vertex_count: usize, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);
    (1..vertex_count)
        .map(|position| {
            let parent = order[rng.gen_range(0..position)];
            let child = order[position];
            if rng.gen_bool(0.5) {
                (parent, child)
            } else {
                (child, parent)
            }
        })
        .collect()
}

/// Backbone plus every other pair with probability `edge_probability`,
/// shuffled so the backbone does not sit at the lowest edge indices.
fn connected_pairs(
    vertex_count: usize,
    edge_probability: f64,
    rng: &mut SmallRng,
) -> Vec<(usize, usize)> {
    let mut pairs = backbone(vertex_count, rng);
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                pairs.push((i, j));
            }
        }
    }
    pairs.shuffle(rng);
    pairs
}

fn with_random_weights(pairs: Vec<(usize, usize)>, rng: &mut SmallRng) -> Vec<Edge> {
    pairs
        .into_iter()
        .map(|(source, dest)| Edge::new(source, dest, rng.gen_range(WEIGHT_RANGE)))
        .collect()
}
