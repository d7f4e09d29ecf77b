//! Boruvka core library.
//!
//! Computes minimum spanning trees of undirected weighted graphs with a
//! parallel variant of Boruvka's algorithm: each round a fixed pool of worker
//! threads finds every component's cheapest outgoing edge, then the round
//! controller contracts those edges through a disjoint-set forest.
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled each round emits:
//!
//! - `boruvka_rounds_total` (counter)
//! - `boruvka_contractions_total` (counter)
//! - `boruvka_stale_proposals_total` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod boruvka;
mod builder;
mod error;
mod graph;
mod mst;
mod result;
#[cfg(test)]
mod test_utils;

pub use crate::{
    boruvka::Boruvka,
    builder::{BoruvkaBuilder, ScanStrategy},
    error::{BoruvkaError, BoruvkaErrorCode, ErrorKind, GraphError, GraphErrorCode, Result},
    graph::{Edge, Graph, MAX_EDGE_COUNT, VertexId},
    result::MinimumSpanningTree,
};
