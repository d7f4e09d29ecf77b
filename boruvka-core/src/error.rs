//! Error types for the Boruvka core library.
//!
//! Defines error enums exposed by the public API, their stable machine-readable
//! codes, and a convenient result alias.

use std::{fmt, io, sync::Arc};

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Broad failure classes shared by every error in the crate.
///
/// All of them are fatal: a computation either yields a complete spanning
/// tree or one of these.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A count or configuration value was out of its permitted range.
    InvalidInput,
    /// The graph has more than one connected component.
    DisconnectedGraph,
    /// An edge violated the graph's structural preconditions.
    PreconditionViolation,
    /// A worker thread or internal invariant failed.
    Internal,
}

impl ErrorKind {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::DisconnectedGraph => "DISCONNECTED_GRAPH",
            Self::PreconditionViolation => "PRECONDITION_VIOLATION",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced while validating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The graph declared zero vertices.
    #[error("graph must contain at least one vertex")]
    EmptyGraph,
    /// An edge endpoint lies outside `[0, vertex_count)`.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    VertexOutOfRange {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// The out-of-range endpoint.
        vertex: VertexId,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge connects a vertex to itself.
    #[error("edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoop {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// The vertex at both ends of the edge.
        vertex: VertexId,
    },
    /// The edge list is too long to be indexed by the cheapest-edge table.
    #[error("graph has {count} edges, but at most {max} are supported")]
    TooManyEdges {
        /// Number of edges supplied.
        count: usize,
        /// Largest supported edge count.
        max: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph declared zero vertices.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// An edge endpoint lies outside the vertex range.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge connects a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// The edge list is too long.
        TooManyEdges => TooManyEdges { .. } => "GRAPH_TOO_MANY_EDGES",
    }
}

impl GraphError {
    /// Classifies the error within the crate-wide taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyGraph | Self::TooManyEdges { .. } => ErrorKind::InvalidInput,
            Self::VertexOutOfRange { .. } | Self::SelfLoop { .. } => {
                ErrorKind::PreconditionViolation
            }
        }
    }
}

/// Error type produced when configuring or running [`crate::Boruvka`].
#[non_exhaustive]
#[derive(Clone, Debug, Error)]
pub enum BoruvkaError {
    /// The worker count must be greater than zero.
    #[error("worker_count must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The invalid worker count supplied by the caller.
        got: usize,
    },
    /// The graph was rejected during validation.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// A round contracted nothing while several components remained.
    #[error("graph is disconnected: {components} components cannot be merged further")]
    DisconnectedGraph {
        /// Number of components left when progress stopped.
        components: usize,
    },
    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker {worker}: {source}")]
    WorkerSpawn {
        /// Index of the worker that could not be started.
        worker: usize,
        /// Error reported by the thread builder.
        #[source]
        source: Arc<io::Error>,
    },
    /// A worker thread panicked before completing its scan.
    #[error("worker {worker} panicked during the closest-edge scan")]
    WorkerPanicked {
        /// Index of the worker that panicked.
        worker: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("Boruvka invariant violated: {invariant} (index {index})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The index that violated the invariant.
        index: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`BoruvkaError`] variants.
    enum BoruvkaErrorCode for BoruvkaError {
        /// The worker count must be greater than zero.
        InvalidWorkerCount => InvalidWorkerCount { .. } => "BORUVKA_INVALID_WORKER_COUNT",
        /// The graph was rejected during validation.
        InvalidGraph => Graph { .. } => "BORUVKA_INVALID_GRAPH",
        /// The graph has more than one connected component.
        DisconnectedGraph => DisconnectedGraph { .. } => "BORUVKA_DISCONNECTED_GRAPH",
        /// A worker thread could not be started.
        WorkerSpawn => WorkerSpawn { .. } => "BORUVKA_WORKER_SPAWN",
        /// A worker thread panicked.
        WorkerPanicked => WorkerPanicked { .. } => "BORUVKA_WORKER_PANICKED",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "BORUVKA_INVARIANT_VIOLATION",
    }
}

impl BoruvkaError {
    /// Retrieve the inner [`GraphErrorCode`] when the graph was rejected.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }

    /// Classifies the error within the crate-wide taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidWorkerCount { .. } => ErrorKind::InvalidInput,
            Self::Graph(error) => error.kind(),
            Self::DisconnectedGraph { .. } => ErrorKind::DisconnectedGraph,
            Self::WorkerSpawn { .. }
            | Self::WorkerPanicked { .. }
            | Self::InvariantViolation { .. } => ErrorKind::Internal,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BoruvkaError>;
