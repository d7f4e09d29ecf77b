//! Builder utilities for configuring Boruvka runs.
//!
//! Exposes the scan strategy selection surface and the validation performed
//! before constructing [`Boruvka`] instances.

use std::num::NonZeroUsize;

use crate::{Result, boruvka::Boruvka, error::BoruvkaError};

const DEFAULT_WORKER_COUNT: usize = 4;

/// How the closest-edge scan divides work between worker threads.
///
/// # Examples
/// ```
/// use boruvka_core::ScanStrategy;
///
/// assert_eq!(ScanStrategy::default(), ScanStrategy::VertexOwnership);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScanStrategy {
    /// Worker `t` owns vertices `t, t + T, t + 2T, ...` and rescans the whole
    /// edge list once per owned vertex, costing `O(V * E / T)` per worker and
    /// round.
    #[default]
    VertexOwnership,
    /// Each worker scans one contiguous slice of the edge list once per round,
    /// costing `O(E / T)` per worker and round.
    EdgePartition,
}

/// Configures and constructs [`Boruvka`] instances.
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaBuilder, ScanStrategy};
///
/// let boruvka = BoruvkaBuilder::new()
///     .with_worker_count(8)
///     .with_scan_strategy(ScanStrategy::EdgePartition)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(boruvka.worker_count().get(), 8);
/// assert_eq!(boruvka.scan_strategy(), ScanStrategy::EdgePartition);
/// ```
#[derive(Debug, Clone)]
pub struct BoruvkaBuilder {
    worker_count: usize,
    scan_strategy: ScanStrategy,
}

impl Default for BoruvkaBuilder {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            scan_strategy: ScanStrategy::default(),
        }
    }
}

impl BoruvkaBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BoruvkaBuilder, ScanStrategy};
    ///
    /// let builder = BoruvkaBuilder::new();
    /// assert_eq!(builder.worker_count(), 4);
    /// assert_eq!(builder.scan_strategy(), ScanStrategy::VertexOwnership);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of worker threads spawned per round.
    #[must_use]
    pub const fn with_worker_count(mut self, workers: usize) -> Self {
        self.worker_count = workers;
        self
    }

    /// Returns the configured worker count.
    #[must_use]
    pub const fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Sets how each round's scan is divided between workers.
    #[must_use]
    pub const fn with_scan_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.scan_strategy = strategy;
        self
    }

    /// Returns the configured scan strategy.
    #[must_use]
    pub const fn scan_strategy(&self) -> ScanStrategy {
        self.scan_strategy
    }

    /// Validates the configuration and constructs a [`Boruvka`] instance.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::InvalidWorkerCount`] when the worker count is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BoruvkaBuilder, BoruvkaError};
    ///
    /// let err = BoruvkaBuilder::new().with_worker_count(0).build().unwrap_err();
    /// assert!(matches!(err, BoruvkaError::InvalidWorkerCount { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Boruvka> {
        let worker_count =
            NonZeroUsize::new(self.worker_count).ok_or(BoruvkaError::InvalidWorkerCount {
                got: self.worker_count,
            })?;

        Ok(Boruvka::new(worker_count, self.scan_strategy))
    }
}
