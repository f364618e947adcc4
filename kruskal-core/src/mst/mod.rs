//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Edges are validated, sorted by ascending weight, and scanned once. Each
//! edge whose endpoints lie in different components of a
//! [`DisjointSetForest`] is accepted and the components are merged; every
//! other edge would close a cycle and is discarded. The scan stops as soon as
//! `V - 1` edges are accepted or the edges run out, in which case the result is
//! a spanning forest of a disconnected graph.

use std::fmt;

use tracing::{info, instrument, trace, warn};

use crate::{DisjointSetForest, Edge, MstError, Weight, edge::sort_by_weight};

/// Lifecycle of an [`MstBuilder`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BuilderState {
    /// Fewer than `V - 1` edges are accepted and unexamined edges remain.
    Accumulating,
    /// The tree is complete or the edge supply is exhausted.
    Done,
}

/// Why an MST computation stopped.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Termination {
    /// `V - 1` edges were accepted (trivially true for `V <= 1`).
    SpanningTreeComplete,
    /// Every edge was examined before `V - 1` edges could be accepted.
    EdgesExhausted,
}

impl Termination {
    /// Returns the symbolic identifier used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SpanningTreeComplete => "spanning_tree_complete",
            Self::EdgesExhausted => "edges_exhausted",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of examining a single edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step<W> {
    /// The edge joined two components and is part of the result.
    Accepted(Edge<W>),
    /// The edge's endpoints already shared a component.
    Rejected(Edge<W>),
}

impl<W: Copy> Step<W> {
    /// Returns the examined edge.
    #[must_use]
    pub const fn edge(&self) -> Edge<W> {
        match self {
            Self::Accepted(edge) | Self::Rejected(edge) => *edge,
        }
    }

    /// Returns `true` for [`Step::Accepted`].
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// The result of a minimum spanning forest computation.
///
/// When the input graph is connected the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest<W> {
    edges: Vec<Edge<W>>,
    total_cost: W,
    vertex_count: usize,
    component_count: usize,
    examined: usize,
    termination: Termination,
}

impl<W: Weight> SpanningForest<W> {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub const fn total_cost(&self) -> W {
        self.total_cost
    }

    /// Returns the number of vertices in the input graph.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of connected components spanned by the result.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns how many sorted edges were examined before stopping.
    #[must_use]
    pub const fn examined(&self) -> usize {
        self.examined
    }

    /// Returns how many examined edges were discarded as cycle-forming.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.examined - self.edges.len()
    }

    /// Returns why the computation stopped.
    #[must_use]
    pub const fn termination(&self) -> Termination {
        self.termination
    }

    /// Returns `true` when the result connects every vertex, i.e. it holds
    /// exactly `V - 1` edges.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }

    /// Consumes the forest and returns the accepted edges with the total cost.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge<W>>, W) {
        (self.edges, self.total_cost)
    }
}

/// Incremental Kruskal driver.
///
/// The builder owns the sorted edge list and the disjoint-set forest for a
/// single computation. [`MstBuilder::step`] examines one edge at a time, which
/// makes the greedy loop observable; [`MstBuilder::finish`] drains whatever
/// remains and produces the [`SpanningForest`].
///
/// # Examples
/// ```
/// use kruskal_core::{BuilderState, Edge, MstBuilder, Step};
///
/// let edges = vec![Edge::new(0, 1, 3), Edge::new(1, 2, 1), Edge::new(0, 2, 2)];
/// let mut builder = MstBuilder::new(3, edges)?;
/// assert_eq!(builder.step(), Some(Step::Accepted(Edge::new(1, 2, 1))));
/// assert_eq!(builder.step(), Some(Step::Accepted(Edge::new(0, 2, 2))));
/// assert_eq!(builder.state(), BuilderState::Done);
/// assert_eq!(builder.step(), None);
///
/// let forest = builder.finish()?;
/// assert_eq!(forest.total_cost(), 3);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MstBuilder<W> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
    cursor: usize,
    forest: DisjointSetForest,
    accepted: Vec<Edge<W>>,
}

impl<W: Weight> MstBuilder<W> {
    /// Validates and sorts `edges` and prepares a forest of `vertex_count`
    /// singleton components.
    ///
    /// # Errors
    /// Returns [`MstError::InvalidVertex`] when an edge endpoint is not below
    /// `vertex_count`, or [`MstError::NonFiniteWeight`] when a float weight is
    /// NaN or infinite.
    pub fn new(vertex_count: usize, mut edges: Vec<Edge<W>>) -> Result<Self, MstError> {
        for (edge_index, edge) in edges.iter().enumerate() {
            validate_edge(edge, edge_index, vertex_count)?;
        }
        sort_by_weight(&mut edges);
        // At most min(V - 1, E) edges can ever be accepted.
        let capacity = vertex_count.saturating_sub(1).min(edges.len());

        Ok(Self {
            vertex_count,
            edges,
            cursor: 0,
            forest: DisjointSetForest::new(vertex_count),
            accepted: Vec::with_capacity(capacity),
        })
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> BuilderState {
        if self.accepted.len() >= self.required_edges() || self.cursor >= self.edges.len() {
            BuilderState::Done
        } else {
            BuilderState::Accumulating
        }
    }

    /// Returns the edges accepted so far, in acceptance order.
    #[must_use]
    pub fn accepted(&self) -> &[Edge<W>] {
        &self.accepted
    }

    /// Returns the disjoint-set forest in its current state.
    #[must_use]
    pub const fn forest(&self) -> &DisjointSetForest {
        &self.forest
    }

    /// Examines the next edge in weight order.
    ///
    /// Returns `None` once the builder is [`BuilderState::Done`].
    pub fn step(&mut self) -> Option<Step<W>> {
        if self.state() == BuilderState::Done {
            return None;
        }
        let edge = *self.edges.get(self.cursor)?;
        self.cursor += 1;

        let x = self.forest.find_root(edge.source());
        let y = self.forest.find_root(edge.target());
        if x == y {
            trace!(%edge, root = x, "edge rejected: would close a cycle");
            return Some(Step::Rejected(edge));
        }

        self.forest.union(x, y);
        self.accepted.push(edge);
        trace!(%edge, accepted = self.accepted.len(), "edge accepted");
        Some(Step::Accepted(edge))
    }

    /// Examines edges until the builder is done.
    pub fn run(&mut self) {
        while self.step().is_some() {}
    }

    /// Runs the builder to completion and returns the spanning forest.
    ///
    /// # Errors
    /// Returns [`MstError::CostOverflow`] when the accepted weights cannot be
    /// summed in `W`.
    pub fn finish(mut self) -> Result<SpanningForest<W>, MstError> {
        self.run();

        let total_cost = self
            .accepted
            .iter()
            .enumerate()
            .try_fold(W::ZERO, |total, (index, edge)| {
                total
                    .accumulate(edge.weight())
                    .ok_or(MstError::CostOverflow { accepted: index + 1 })
            })?;

        let termination = if self.accepted.len() == self.required_edges() {
            Termination::SpanningTreeComplete
        } else {
            Termination::EdgesExhausted
        };

        let forest = SpanningForest {
            total_cost,
            vertex_count: self.vertex_count,
            component_count: self.forest.component_count(),
            examined: self.cursor,
            termination,
            edges: self.accepted,
        };

        info!(
            accepted = forest.edges.len(),
            rejected = forest.rejected(),
            components = forest.component_count,
            termination = %termination,
            "mst computation completed"
        );
        Ok(forest)
    }

    const fn required_edges(&self) -> usize {
        self.vertex_count.saturating_sub(1)
    }
}

/// Computes a minimum spanning tree (or forest) with Kruskal's algorithm.
///
/// Edges are undirected; their supplied orientation is preserved in the
/// output. Self-loops and parallel edges need no special handling: whichever
/// copy would close a cycle is discarded.
///
/// # Errors
/// Returns an error when:
/// - an edge references a vertex `>= vertex_count`
/// - a float weight is NaN or infinite
/// - the total cost overflows `W`
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, compute_mst};
///
/// let edges = [
///     Edge::new(0, 1, 10),
///     Edge::new(0, 2, 6),
///     Edge::new(0, 3, 5),
///     Edge::new(1, 3, 15),
///     Edge::new(2, 3, 4),
/// ];
/// let forest = compute_mst(4, &edges)?;
/// assert_eq!(
///     forest.edges(),
///     &[Edge::new(2, 3, 4), Edge::new(0, 3, 5), Edge::new(0, 1, 10)]
/// );
/// assert_eq!(forest.total_cost(), 19);
/// # Ok::<(), kruskal_core::MstError>(())
/// ```
#[instrument(
    name = "mst.compute",
    err,
    skip(edges),
    fields(edge_count = edges.len()),
)]
pub fn compute_mst<W: Weight>(
    vertex_count: usize,
    edges: &[Edge<W>],
) -> Result<SpanningForest<W>, MstError> {
    MstBuilder::new(vertex_count, edges.to_vec())?.finish()
}

fn validate_edge<W: Weight>(
    edge: &Edge<W>,
    edge_index: usize,
    vertex_count: usize,
) -> Result<(), MstError> {
    for vertex in [edge.source(), edge.target()] {
        if vertex >= vertex_count {
            warn!(edge_index, vertex, vertex_count, "rejecting invalid edge");
            return Err(MstError::InvalidVertex {
                vertex,
                vertex_count,
                edge_index,
            });
        }
    }

    if !edge.weight().is_admissible() {
        warn!(edge_index, weight = ?edge.weight(), "rejecting invalid edge");
        return Err(MstError::NonFiniteWeight {
            left: edge.source(),
            right: edge.target(),
            edge_index,
        });
    }

    Ok(())
}

#[cfg(test)]
mod property;
