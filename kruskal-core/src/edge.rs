//! Weighted undirected edges and the weight-ordered edge sort.

use std::fmt;

use crate::Weight;

/// An undirected weighted edge between two vertex indices.
///
/// `(source, target)` and `(target, source)` describe the same connection; the
/// orientation supplied by the caller is kept so results render the way the
/// input was written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Weight> Edge<W> {
    /// Creates an edge between `source` and `target` with the given weight.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Edge;
    ///
    /// let edge = Edge::new(2, 3, 4);
    /// assert_eq!(edge.to_string(), "2 -- 3 == 4");
    /// ```
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the source endpoint as supplied.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Returns the target endpoint as supplied.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Returns the edge weight.
    #[must_use]
    pub const fn weight(&self) -> W {
        self.weight
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the endpoints as `(min, max)`, the orientation-free identity of
    /// the edge.
    #[must_use]
    pub const fn canonical_endpoints(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} == {}", self.source, self.target, self.weight)
    }
}

/// Sorts `edges` in place by ascending weight.
///
/// The sort is unstable: edges with equal weights may appear in any relative
/// order. The multiset of edges is unchanged.
pub fn sort_by_weight<W: Weight>(edges: &mut [Edge<W>]) {
    edges.sort_unstable_by(|left, right| left.weight.weight_cmp(&right.weight));
}

/// Consumes `edges` and returns them ordered by ascending weight.
#[must_use]
pub fn sorted_by_weight<W: Weight>(mut edges: Vec<Edge<W>>) -> Vec<Edge<W>> {
    sort_by_weight(&mut edges);
    edges
}
