//! Benchmark parameter types.

use std::fmt;

use boruvka_core::ScanStrategy;

/// Parameters for one Boruvka benchmark run.
#[derive(Clone, Debug)]
pub struct BoruvkaBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Worker threads per round.
    pub workers: usize,
    /// How the closest-edge scan is divided.
    pub strategy: ScanStrategy,
}

impl fmt::Display for BoruvkaBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy = match self.strategy {
            ScanStrategy::VertexOwnership => "vertex",
            ScanStrategy::EdgePartition => "partition",
        };
        write!(f, "n={},t={},{strategy}", self.vertex_count, self.workers)
    }
}
