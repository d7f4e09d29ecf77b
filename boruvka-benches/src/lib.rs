//! Benchmark support crate for boruvka.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks comparing worker counts and scan strategies.

pub mod error;
pub mod params;
pub mod source;
