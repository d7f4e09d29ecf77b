//! Result type for minimum spanning tree computations.

use crate::graph::Edge;

/// Represents the output of a [`crate::Boruvka::run`] invocation.
///
/// Edges appear in the order they were contracted: round by round, and within
/// a round by increasing component representative.
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaBuilder, Edge, Graph};
///
/// let graph = Graph::new(2, vec![Edge::new(0, 1, 7)])?;
/// let tree = BoruvkaBuilder::new().build()?.run(&graph)?;
/// assert_eq!(tree.edges(), &[Edge::new(0, 1, 7)]);
/// assert_eq!(tree.total_weight(), 7);
/// assert_eq!(tree.rounds(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MinimumSpanningTree {
    edges: Vec<Edge>,
    total_weight: i64,
    rounds: usize,
}

impl MinimumSpanningTree {
    pub(crate) const fn new(edges: Vec<Edge>, total_weight: i64, rounds: usize) -> Self {
        Self {
            edges,
            total_weight,
            rounds,
        }
    }

    /// Returns the tree edges, exactly `vertex_count - 1` of them.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the sum of the tree's edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns how many Boruvka rounds ran before one component remained.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rounds(&self) -> usize { self.rounds }

    /// Consumes the tree, returning its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }
}
