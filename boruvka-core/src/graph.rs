//! Undirected weighted graph model.
//!
//! A [`Graph`] is validated once when constructed, so the parallel scan and the
//! round controller can treat every edge as well formed.

use rayon::prelude::*;

use crate::error::GraphError;

/// Index of a vertex in `[0, vertex_count)`.
///
/// Through the disjoint-set structure a vertex id also names the component it
/// represents.
pub type VertexId = usize;

/// Largest number of edges a [`Graph`] may hold.
///
/// Edge indices are packed into 32 bits of each cheapest-edge slot.
pub const MAX_EDGE_COUNT: usize = u32::MAX as usize;

/// An undirected weighted edge.
///
/// # Examples
/// ```
/// use boruvka_core::Edge;
///
/// let edge = Edge::new(0, 3, 5);
/// assert_eq!((edge.source(), edge.dest(), edge.weight()), (0, 3, 5));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: VertexId,
    dest: VertexId,
    weight: i32,
}

impl Edge {
    /// Creates an edge between `source` and `dest`.
    #[must_use]
    pub const fn new(source: VertexId, dest: VertexId, weight: i32) -> Self {
        Self {
            source,
            dest,
            weight,
        }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dest(&self) -> VertexId { self.dest }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i32 { self.weight }
}

/// A validated undirected graph: a vertex count and its candidate edges.
///
/// Parallel edges are permitted; self-loops and out-of-range endpoints are
/// not.
///
/// # Examples
/// ```
/// use boruvka_core::{Edge, Graph, GraphError};
///
/// let graph = Graph::new(3, vec![Edge::new(0, 1, 4), Edge::new(1, 2, 2)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edges().len(), 2);
///
/// let err = Graph::new(2, vec![Edge::new(0, 2, 1)]).unwrap_err();
/// assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 2, .. }));
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Validates `edges` against `vertex_count` and builds the graph.
    ///
    /// When several edges are malformed the one with the lowest index is
    /// reported.
    ///
    /// # Errors
    /// Returns [`GraphError`] when `vertex_count == 0`, the edge list is longer
    /// than [`MAX_EDGE_COUNT`], or an edge is a self-loop or references a vertex
    /// outside the graph.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        if edges.len() > MAX_EDGE_COUNT {
            return Err(GraphError::TooManyEdges {
                count: edges.len(),
                max: MAX_EDGE_COUNT,
            });
        }

        let first_invalid = edges
            .par_iter()
            .enumerate()
            .filter_map(|(index, edge)| validate_edge(index, edge, vertex_count).err())
            .min_by_key(offending_edge);
        if let Some(error) = first_invalid {
            return Err(error);
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the candidate edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }
}

fn validate_edge(index: usize, edge: &Edge, vertex_count: usize) -> Result<(), GraphError> {
    for vertex in [edge.source, edge.dest] {
        if vertex >= vertex_count {
            return Err(GraphError::VertexOutOfRange {
                edge: index,
                vertex,
                vertex_count,
            });
        }
    }
    if edge.source == edge.dest {
        return Err(GraphError::SelfLoop {
            edge: index,
            vertex: edge.source,
        });
    }
    Ok(())
}

fn offending_edge(error: &GraphError) -> usize {
    match error {
        GraphError::VertexOutOfRange { edge, .. } | GraphError::SelfLoop { edge, .. } => *edge,
        GraphError::EmptyGraph | GraphError::TooManyEdges { .. } => 0,
    }
}
