//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use boruvka_core::{BoruvkaError, GraphError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated edge list was rejected.
    #[error("graph validation failed: {0}")]
    Graph(#[from] GraphError),
    /// Configuring or running the MST computation failed.
    #[error("MST computation failed: {0}")]
    Boruvka(#[from] BoruvkaError),
}
