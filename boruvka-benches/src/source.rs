//! Synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning backbone is laid
//! down first, then extra random edges are added on top. Generation is
//! seeded for reproducibility across benchmark runs.

use boruvka_core::{Edge, Graph};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was below two.
    #[error("vertex count must be at least 2 (got {got})")]
    TooFewVertices {
        /// The requested vertex count.
        got: usize,
    },
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the backbone.
    pub extra_edges_per_vertex: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates the edge list described by `config`.
///
/// # Errors
///
/// Returns [`SyntheticError::TooFewVertices`] if `vertex_count` is below two.
///
/// # Examples
///
/// ```
/// use boruvka_benches::source::{SyntheticGraphConfig, generate_edges};
///
/// let config = SyntheticGraphConfig { vertex_count: 10, extra_edges_per_vertex: 2, seed: 42 };
/// let edges = generate_edges(&config).expect("valid config");
/// assert_eq!(edges.len(), 9 + 20);
/// ```
pub fn generate_edges(config: &SyntheticGraphConfig) -> Result<Vec<Edge>, SyntheticError> {
    let vertex_count = config.vertex_count;
    if vertex_count < 2 {
        return Err(SyntheticError::TooFewVertices { got: vertex_count });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let extra = vertex_count.saturating_mul(config.extra_edges_per_vertex);
    let mut edges = Vec::with_capacity(vertex_count - 1 + extra);

    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(&mut rng);
    for position in 1..order.len() {
        let parent = order.get(rng.gen_range(0..position)).copied().unwrap_or(0);
        let child = order.get(position).copied().unwrap_or(0);
        edges.push(Edge::new(parent, child, random_weight(&mut rng)));
    }

    while edges.len() < vertex_count - 1 + extra {
        let source = rng.gen_range(0..vertex_count);
        let dest = rng.gen_range(0..vertex_count);
        if source != dest {
            edges.push(Edge::new(source, dest, random_weight(&mut rng)));
        }
    }

    edges.shuffle(&mut rng);
    Ok(edges)
}

/// Generates and validates a connected graph.
///
/// # Errors
///
/// Returns [`crate::error::BenchSetupError`] if generation or validation
/// fails.
pub fn generate_graph(
    config: &SyntheticGraphConfig,
) -> Result<Graph, crate::error::BenchSetupError> {
    let edges = generate_edges(config)?;
    Ok(Graph::new(config.vertex_count, edges)?)
}

fn random_weight(rng: &mut SmallRng) -> i32 {
    rng.gen_range(1..=1_000_000)
}
