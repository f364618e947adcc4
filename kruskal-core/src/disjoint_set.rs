//! Disjoint-set forest (union-find) used to reject cycle-forming edges.
//!
//! The forest is an arena of [`Subset`] records indexed by vertex id. Roots are
//! resolved with full path compression and components are merged by rank, so
//! both operations run in amortised near-constant time.

/// Per-vertex record of the forest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Subset {
    parent: usize,
    rank: u32,
}

impl Subset {
    const fn singleton(vertex: usize) -> Self {
        Self {
            parent: vertex,
            rank: 0,
        }
    }

    /// Returns the parent vertex; a root is its own parent.
    #[must_use]
    pub const fn parent(&self) -> usize {
        self.parent
    }

    /// Returns the rank, an upper bound on the height of the subtree rooted
    /// here.
    #[must_use]
    pub const fn rank(&self) -> u32 {
        self.rank
    }
}

/// A partition of `0..len` into disjoint components.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSetForest;
///
/// let mut forest = DisjointSetForest::new(4);
/// assert!(forest.union(0, 1));
/// assert!(forest.union(2, 3));
/// assert!(!forest.union(1, 0));
/// assert_eq!(forest.component_count(), 2);
/// assert_eq!(forest.find_root(1), forest.find_root(0));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    subsets: Vec<Subset>,
    components: usize,
}

impl DisjointSetForest {
    /// Creates `vertex_count` singleton components, each its own root with
    /// rank zero.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            subsets: (0..vertex_count).map(Subset::singleton).collect(),
            components: vertex_count,
        }
    }

    /// Returns the number of vertices tracked by the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    /// Returns `true` when the forest tracks no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    /// Returns the number of distinct components (roots).
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the record for `vertex`, or `None` when it is out of range.
    #[must_use]
    pub fn subset(&self, vertex: usize) -> Option<Subset> {
        self.subsets.get(vertex).copied()
    }

    /// Returns the root of the component containing `vertex`.
    ///
    /// Every vertex visited on the way up is re-pointed directly at the root.
    ///
    /// # Panics
    /// Panics when `vertex >= self.len()`.
    pub fn find_root(&mut self, vertex: usize) -> usize {
        let mut root = vertex;
        while self.subsets[root].parent != root {
            root = self.subsets[root].parent;
        }

        let mut current = vertex;
        while current != root {
            let next = self.subsets[current].parent;
            self.subsets[current].parent = root;
            current = next;
        }

        root
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Panics
    /// Panics when either vertex is out of range.
    pub fn same_component(&mut self, left: usize, right: usize) -> bool {
        self.find_root(left) == self.find_root(right)
    }

    /// Merges the components containing `x` and `y`.
    ///
    /// The lower-ranked root is attached beneath the higher-ranked one. On
    /// equal ranks the root of `y` is attached beneath the root of `x`, whose
    /// rank grows by one. Returns `false` without modifying the forest when
    /// both already share a root.
    ///
    /// # Panics
    /// Panics when either vertex is out of range.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find_root(x);
        let root_y = self.find_root(y);
        if root_x == root_y {
            return false;
        }

        let rank_x = self.subsets[root_x].rank;
        let rank_y = self.subsets[root_y].rank;
        if rank_y < rank_x {
            self.subsets[root_y].parent = root_x;
        } else if rank_x < rank_y {
            self.subsets[root_x].parent = root_y;
        } else {
            self.subsets[root_y].parent = root_x;
            self.subsets[root_x].rank = rank_x.saturating_add(1);
        }

        self.components -= 1;
        true
    }
}
