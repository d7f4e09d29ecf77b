//! Property-based tests for the parallel Boruvka MST implementation.
//!
//! Verifies the Boruvka rounds against a sequential Kruskal oracle,
//! validates structural invariants (acyclicity, spanning, edge provenance),
//! and checks that neither the worker count, the scan strategy, nor repeated
//! runs change the result.

mod oracle;
mod strategies;
mod types;
