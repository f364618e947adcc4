//! Benchmark support crate for kruskal.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for edge sorting and MST construction.

pub mod error;
pub mod params;
pub mod source;
