//! Benchmark parameter types.

use std::fmt;

/// Parameters for an MST benchmark run, rendered as the Criterion id.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Extra random edges per vertex on top of the spanning path.
    pub extra_edges_per_vertex: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},deg={}",
            self.vertex_count, self.extra_edges_per_vertex
        )
    }
}
