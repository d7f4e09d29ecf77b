//! Runtime entry point for minimum spanning tree computations.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    Result,
    builder::ScanStrategy,
    graph::{Edge, Graph},
    mst::boruvka_mst,
    result::MinimumSpanningTree,
};

/// Computes minimum spanning trees with a fixed worker count.
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaBuilder, Edge, Graph};
///
/// let graph = Graph::new(
///     4,
///     vec![
///         Edge::new(0, 1, 10),
///         Edge::new(0, 2, 6),
///         Edge::new(0, 3, 5),
///         Edge::new(1, 3, 15),
///         Edge::new(2, 3, 4),
///     ],
/// )?;
/// let boruvka = BoruvkaBuilder::new().with_worker_count(2).build()?;
/// let tree = boruvka.run(&graph)?;
/// assert_eq!(tree.total_weight(), 19);
/// assert_eq!(tree.edges().len(), 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Boruvka {
    worker_count: NonZeroUsize,
    scan_strategy: ScanStrategy,
}

impl Boruvka {
    pub(crate) const fn new(worker_count: NonZeroUsize, scan_strategy: ScanStrategy) -> Self {
        Self {
            worker_count,
            scan_strategy,
        }
    }

    /// Returns the number of worker threads spawned per round.
    #[must_use]
    pub const fn worker_count(&self) -> NonZeroUsize {
        self.worker_count
    }

    /// Returns how each round's scan is divided between workers.
    #[must_use]
    pub const fn scan_strategy(&self) -> ScanStrategy {
        self.scan_strategy
    }

    /// Computes the minimum spanning tree of a connected `graph`.
    ///
    /// The result does not depend on the worker count or scan strategy: weight
    /// ties are broken by the lower input edge index.
    ///
    /// # Errors
    /// Returns [`crate::BoruvkaError::DisconnectedGraph`] when `graph` has more
    /// than one connected component, and the worker errors
    /// [`crate::BoruvkaError::WorkerSpawn`] or
    /// [`crate::BoruvkaError::WorkerPanicked`] when a scan thread fails.
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edges().len(),
            workers = %self.worker_count,
            strategy = ?self.scan_strategy,
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<MinimumSpanningTree> {
        let tree = boruvka_mst(graph, self.worker_count, self.scan_strategy)?;
        info!(
            total_weight = tree.total_weight(),
            rounds = tree.rounds(),
            "minimum spanning tree computed"
        );
        Ok(tree)
    }

    /// Validates `edges` as a graph on `vertex_count` vertices and runs it.
    ///
    /// # Errors
    /// Returns [`crate::BoruvkaError::Graph`] when validation fails, otherwise
    /// the errors of [`Self::run`].
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BoruvkaBuilder, BoruvkaError, Edge, GraphErrorCode};
    ///
    /// let boruvka = BoruvkaBuilder::new().build()?;
    /// let err = boruvka.run_edges(2, vec![Edge::new(0, 5, 1)]).unwrap_err();
    /// assert_eq!(err.graph_code(), Some(GraphErrorCode::VertexOutOfRange));
    /// # Ok::<(), BoruvkaError>(())
    /// ```
    pub fn run_edges(&self, vertex_count: usize, edges: Vec<Edge>) -> Result<MinimumSpanningTree> {
        let graph = Graph::new(vertex_count, edges)?;
        self.run(&graph)
    }
}
