//! Property-based tests for the Kruskal MST builder.
//!
//! Checks the builder against a brute-force minimum spanning forest on tiny
//! graphs, validates structural invariants (acyclicity, edge count,
//! reachability, component agreement) and disjoint-set invariants, and
//! confirms that the accepted edge set does not depend on how `union` breaks
//! rank ties.

mod forest;
mod oracle;
mod strategies;
mod tie_break;
