//! Seeded synthetic graphs for benchmarking.
//!
//! Every graph contains a random Hamiltonian path, so it is connected and the
//! builder always runs until the spanning tree completes. Extra random edges
//! control density.

use kruskal_core::Edge;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Errors that may occur while generating a synthetic graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested maximum weight was zero.
    #[error("maximum weight must be greater than zero")]
    ZeroMaxWeight,
    /// The requested edge count overflowed `usize`.
    #[error("vertex_count * (extra_edges_per_vertex + 1) overflows usize")]
    Overflow,
}

/// Configuration for a synthetic benchmark graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra random edges per vertex on top of the spanning path.
    pub extra_edges_per_vertex: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: u64,
    /// RNG seed.
    pub seed: u64,
}

/// A connected, integer-weighted graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<Edge<u64>>,
}

impl SyntheticGraph {
    /// Generates a graph from `config`.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the vertex count or maximum weight is
    /// zero, or the edge count overflows.
    ///
    /// # Examples
    /// ```
    /// use kruskal_benches::source::{SyntheticGraph, SyntheticGraphConfig};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     vertex_count: 10,
    ///     extra_edges_per_vertex: 2,
    ///     max_weight: 100,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.edges().len(), 9 + 20);
    /// # Ok::<(), kruskal_benches::source::SyntheticError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticError> {
        if config.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if config.max_weight == 0 {
            return Err(SyntheticError::ZeroMaxWeight);
        }
        let capacity = config
            .extra_edges_per_vertex
            .checked_add(1)
            .and_then(|per_vertex| per_vertex.checked_mul(config.vertex_count))
            .ok_or(SyntheticError::Overflow)?;

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut order: Vec<usize> = (0..config.vertex_count).collect();
        order.shuffle(&mut rng);

        let mut edges = Vec::with_capacity(capacity);
        for pair in order.windows(2) {
            if let [source, target] = *pair {
                edges.push(Edge::new(
                    source,
                    target,
                    rng.gen_range(1..=config.max_weight),
                ));
            }
        }
        for _ in 0..config.vertex_count.saturating_mul(config.extra_edges_per_vertex) {
            edges.push(Edge::new(
                rng.gen_range(0..config.vertex_count),
                rng.gen_range(0..config.vertex_count),
                rng.gen_range(1..=config.max_weight),
            ));
        }
        edges.shuffle(&mut rng);

        Ok(Self {
            vertex_count: config.vertex_count,
            edges,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The generated edges in shuffled order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<u64>] {
        &self.edges
    }
}
