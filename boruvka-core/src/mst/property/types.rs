//! Type definitions for MST property-based tests.
//!
//! Provides the fixture, configuration, and weight distribution types used
//! by the graph generation strategies and property functions.

use test_strategy::Arbitrary;

use crate::Edge;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights and topology are chosen, producing inputs that
/// stress different parts of the scan and contraction logic.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight, so the MST is unique.
    #[weight(2)]
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    #[weight(3)]
    ManyIdentical,
    /// Spanning backbone plus roughly `0.5n` to `n` extra edges.
    #[weight(2)]
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    #[weight(2)]
    Dense,
    /// Weights span the whole signed range, including both extremes.
    #[weight(2)]
    SignedExtremes,
    /// Multiple components with no cross-component edges.
    #[weight(2)]
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, generated edges, and the distribution used
/// during generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges; never self-loops, never out of range.
    pub edges: Vec<Edge>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

/// Configuration for the determinism property.
pub(super) struct ConcurrencyConfig {
    /// Number of times to repeat each worker configuration per input.
    pub repetitions: usize,
}

impl ConcurrencyConfig {
    /// Loads the configuration from the environment.
    ///
    /// `BORUVKA_MST_PBT_CONCURRENCY_REPS` controls the repetition count
    /// (default: 3).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("BORUVKA_MST_PBT_CONCURRENCY_REPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);
        Self { repetitions }
    }
}
